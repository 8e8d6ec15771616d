//! Login and signup UI
//!
//! The modal drives a [`crate::core::Wizard`]; completed payloads go to the
//! submission API through [`client`].

pub mod client;
mod modal;
mod step_form;

pub use client::{ClientError, send_submission};
pub use modal::AuthModal;
pub use step_form::{StepFields, StepIndicator, StepState, step_state};
