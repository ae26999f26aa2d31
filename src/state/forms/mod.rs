//! Form domain layer
//!
//! A `FormController` holds the values of one form as a map from field
//! name to `FieldValue`, and produces `Binding`s that connect those values
//! to input widgets. Binding callbacks queue updates; the owner applies
//! them with `FormController::commit`.

mod binding;
mod field;
mod form_state;
mod options;
mod update;

pub use binding::{
    Binding, MembershipBinding, MembershipToggle, SelectBinding, TextBinding, TextSetter,
    ValueBinding, ValueSetter,
};
pub use field::FieldValue;
pub use form_state::{EmptyFieldsReport, FormController, FormData, EMPTY_FIELD_MESSAGE};
pub use options::{FieldKind, FormVariant, RegisterOptions};
pub use update::{FormUpdate, NoopScheduler, RenderFlag, RenderScheduler, UpdateHandle};
