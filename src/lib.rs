//! form-lite - lightweight form state for UI code
//!
//! Tracks named field values, hands out per-widget bindings (text, select,
//! switch, range, radio, checkbox, checkbox groups) and reports which
//! fields are empty.
//!
//! ```
//! use form_lite::{FieldValue, FormController, FormData, RegisterOptions};
//!
//! let mut form = FormController::new(FormData::new());
//! let name = form.register("name", &RegisterOptions::text());
//! if let Some(text) = name.as_text() {
//!     text.on_change_text.call("Ana");
//! }
//! form.commit();
//! assert_eq!(form.get("name"), Some(&FieldValue::from("Ana")));
//! ```

pub mod config;
pub mod error;
pub mod state;

pub use config::FormLiteConfig;
pub use error::{ConfigError, Result};
pub use state::*;
