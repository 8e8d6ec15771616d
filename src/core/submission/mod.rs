//! Submission payloads shared by the browser client and the server API
//!
//! The client posts a [`Submission`] once a form (login, the last signup step
//! or the contact form) validates. The server re-checks the fields against the
//! same schemas before acknowledging with a [`SubmissionReceipt`].

#[cfg(feature = "ssr")]
pub mod api;

#[cfg(feature = "ssr")]
pub use api::{SubmissionApiState, SubmissionError, submission_api_router};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::steps::{FieldValues, StepSchema, contact_step, login_step, signup_steps};
use super::validation::{FieldErrors, ValidationContext, ValidationLevel};

/// Which form produced the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    #[display("login")]
    Login,
    #[display("signup")]
    Signup,
    #[display("contact")]
    Contact,
}

impl SubmissionKind {
    /// API path accepting this kind
    pub fn endpoint(&self) -> &'static str {
        match self {
            SubmissionKind::Login => "/api/auth/login",
            SubmissionKind::Signup => "/api/auth/signup",
            SubmissionKind::Contact => "/api/contact",
        }
    }

    /// Schemas the fields must satisfy, in order
    pub fn schemas(&self, level: ValidationLevel) -> Vec<StepSchema> {
        match self {
            SubmissionKind::Login => vec![login_step()],
            SubmissionKind::Signup => signup_steps(level),
            SubmissionKind::Contact => vec![contact_step()],
        }
    }
}

/// A validated form payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub kind: SubmissionKind,
    pub fields: FieldValues,
}

impl Submission {
    pub fn new(kind: SubmissionKind, fields: FieldValues) -> Self {
        Self { kind, fields }
    }

    pub fn login(fields: FieldValues) -> Self {
        Self::new(SubmissionKind::Login, fields)
    }

    pub fn signup(fields: FieldValues) -> Self {
        Self::new(SubmissionKind::Signup, fields)
    }

    pub fn contact(fields: FieldValues) -> Self {
        Self::new(SubmissionKind::Contact, fields)
    }

    /// Check every field against the schemas of this kind.
    ///
    /// Errors from all steps are merged; a signup payload missing a whole
    /// step reports every required field of that step.
    pub fn validate(&self, level: ValidationLevel, ctx: &ValidationContext) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for schema in self.kind.schemas(level) {
            if let Err(step_errors) = schema.validate(&self.fields, ctx) {
                for (field, err) in step_errors.iter() {
                    errors.add(field, err.clone());
                }
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Names of the submitted fields, safe to log
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}

/// Acknowledgement returned for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub kind: SubmissionKind,
}

impl SubmissionReceipt {
    pub fn new(kind: SubmissionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
        }
    }
}

/// API error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    /// Field name to message, present for validation failures
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_fields(mut self, fields: BTreeMap<String, String>) -> Self {
        self.fields = fields;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::steps::FieldValue;
    use chrono::NaiveDate;

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn fields(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), FieldValue::text(*v)))
            .collect()
    }

    #[test]
    fn test_kind_wire_format() {
        assert_eq!(serde_json::to_string(&SubmissionKind::Signup).unwrap(), r#""signup""#);
        assert_eq!(SubmissionKind::Contact.to_string(), "contact");
        let kind: SubmissionKind = serde_json::from_str(r#""login""#).unwrap();
        assert_eq!(kind, SubmissionKind::Login);
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(SubmissionKind::Login.endpoint(), "/api/auth/login");
        assert_eq!(SubmissionKind::Signup.endpoint(), "/api/auth/signup");
        assert_eq!(SubmissionKind::Contact.endpoint(), "/api/contact");
    }

    #[test]
    fn test_login_validation() {
        let ok = Submission::login(fields(&[("email", "ana@diix.com"), ("password", "segredo")]));
        assert!(ok.validate(ValidationLevel::Standard, &ctx()).is_ok());

        let bad = Submission::login(fields(&[("email", "ana"), ("password", "123")]));
        let errors = bad.validate(ValidationLevel::Standard, &ctx()).unwrap_err();
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
    }

    #[test]
    fn test_partial_signup_reports_missing_steps() {
        let partial = Submission::signup(fields(&[
            ("nome", "Ana"),
            ("sobrenome", "Lima"),
            ("cpf", "123.456.789-01"),
            ("data_nascimento", "2001-05-20"),
        ]));
        let errors = partial.validate(ValidationLevel::Standard, &ctx()).unwrap_err();
        assert!(!errors.contains("nome"));
        assert!(errors.contains("cep"));
        assert!(errors.contains("usuario"));
        assert!(errors.contains("interesses"));
        // Country has a default, so an absent value still passes
        assert!(!errors.contains("pais"));
    }

    #[test]
    fn test_receipt_ids_are_unique() {
        let a = SubmissionReceipt::new(SubmissionKind::Contact);
        let b = SubmissionReceipt::new(SubmissionKind::Contact);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_api_error_omits_empty_fields() {
        let json = serde_json::to_string(&ApiError::new("Fechado", "CLOSED")).unwrap();
        assert_eq!(json, r#"{"error":"Fechado","code":"CLOSED"}"#);

        let parsed: ApiError = serde_json::from_str(&json).unwrap();
        assert!(parsed.fields.is_empty());
    }

    #[test]
    fn test_field_names_never_include_values() {
        let sub = Submission::login(fields(&[("email", "ana@diix.com"), ("password", "segredo")]));
        assert_eq!(sub.field_names(), vec!["email", "password"]);
    }
}
