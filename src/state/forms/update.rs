//! Queued form updates and render scheduling

use super::field::FieldValue;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// A pending change, folded into the form on the next commit
#[derive(Debug, Clone, PartialEq)]
pub enum FormUpdate {
    Set { key: String, value: FieldValue },
    /// Add (`checked`) or remove `option` in the list stored under `key`
    Toggle {
        key: String,
        option: String,
        checked: bool,
    },
    Reset,
}

/// Notified whenever an update is queued, so the host can redraw
#[cfg_attr(test, mockall::automock)]
pub trait RenderScheduler: Send + Sync {
    fn schedule_render(&self);
}

/// Scheduler for hosts that redraw unconditionally
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScheduler;

impl RenderScheduler for NoopScheduler {
    fn schedule_render(&self) {}
}

/// Scheduler that raises a flag the host loop polls
#[derive(Debug, Default)]
pub struct RenderFlag {
    requested: AtomicBool,
}

impl RenderFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a render was requested and clears the flag
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::AcqRel)
    }
}

impl RenderScheduler for RenderFlag {
    fn schedule_render(&self) {
        self.requested.store(true, Ordering::Release);
    }
}

/// Sending side of a controller's update queue, held by binding callbacks
#[derive(Clone)]
pub struct UpdateHandle {
    tx: UnboundedSender<FormUpdate>,
    scheduler: Arc<dyn RenderScheduler>,
}

impl UpdateHandle {
    pub(crate) fn new(tx: UnboundedSender<FormUpdate>, scheduler: Arc<dyn RenderScheduler>) -> Self {
        Self { tx, scheduler }
    }

    /// Queue an update. Updates sent after the controller is gone are dropped.
    pub fn send(&self, update: FormUpdate) {
        tracing::debug!(?update, "queueing form update");
        match self.tx.send(update) {
            Ok(()) => self.scheduler.schedule_render(),
            Err(err) => tracing::debug!("form controller dropped, ignoring {:?}", err.0),
        }
    }

    pub fn set(&self, key: &str, value: FieldValue) {
        self.send(FormUpdate::Set {
            key: key.to_string(),
            value,
        });
    }
}

impl std::fmt::Debug for UpdateHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateHandle")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}
