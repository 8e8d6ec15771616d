//! Common reusable UI components
//!
//! Form fields, the message banners and the modal shell shared by the auth
//! wizard and the contact form.

pub mod form;
pub mod message;
pub mod modal;

pub use form::{FormField, MultiChoiceField, SelectField, TextAreaField};
pub use message::{ErrorMessage, SuccessMessage};
pub use modal::BaseModal;
