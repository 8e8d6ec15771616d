//! Form schemas, validation, the signup wizard and the particle simulation
//!
//! Everything here is plain Rust shared by the server and the browser bundle;
//! only `config` and the submission API are server-side.

#[cfg(feature = "ssr")]
pub mod config;
pub mod mask;
pub mod particles;
pub mod steps;
pub mod submission;
pub mod validation;
pub mod wizard;

pub use particles::{FieldConfig, Link, Particle, ParticleField, Pointer, Sprite};
pub use steps::{FieldKind, FieldSchema, FieldValue, FieldValues, StepSchema};
pub use submission::{ApiError, Submission, SubmissionKind, SubmissionReceipt};
pub use validation::{FieldErrors, ValidationContext, ValidationError, ValidationLevel};
pub use wizard::{Mode, ModeKind, Transition, Wizard, WizardError};
