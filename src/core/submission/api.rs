//! Submission API endpoints
//!
//! Provides REST API endpoints for the landing page forms:
//! - POST /api/auth/login - Login form payload
//! - POST /api/auth/signup - Merged signup wizard payload
//! - POST /api/contact - Contact form payload
//!
//! Payloads are validated again against the same schemas the client uses.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use std::sync::Arc;

use super::{ApiError, Submission, SubmissionKind, SubmissionReceipt};
use crate::core::config::Config;
use crate::core::validation::{FieldErrors, ValidationContext, ValidationLevel};

/// Submission API state
#[derive(Clone)]
pub struct SubmissionApiState {
    pub config: Config,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Cadastro temporariamente indisponível")]
    Closed,

    #[error("Dados inválidos")]
    Invalid(FieldErrors),

    #[error("Formulário {actual} enviado para o endpoint de {expected}")]
    WrongKind {
        expected: SubmissionKind,
        actual: SubmissionKind,
    },
}

/// Convert SubmissionError to API response
impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            SubmissionError::Closed => (StatusCode::SERVICE_UNAVAILABLE, "SUBMISSIONS_CLOSED"),
            SubmissionError::Invalid(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_FIELDS"),
            SubmissionError::WrongKind { .. } => (StatusCode::BAD_REQUEST, "WRONG_KIND"),
        };

        let mut body = ApiError::new(self.to_string(), code);
        if let SubmissionError::Invalid(errors) = &self {
            body = body.with_fields(errors.messages());
        }

        (status, Json(body)).into_response()
    }
}

/// Create the submission API router
pub fn submission_api_router(state: SubmissionApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route(SubmissionKind::Login.endpoint(), post(login_handler))
        .route(SubmissionKind::Signup.endpoint(), post(signup_handler))
        .route(SubmissionKind::Contact.endpoint(), post(contact_handler))
        .with_state(state)
}

/// POST /api/auth/login
async fn login_handler(
    State(state): State<Arc<SubmissionApiState>>,
    Json(submission): Json<Submission>,
) -> Result<Json<SubmissionReceipt>, SubmissionError> {
    accept(&state, SubmissionKind::Login, submission).map(Json)
}

/// POST /api/auth/signup
async fn signup_handler(
    State(state): State<Arc<SubmissionApiState>>,
    Json(submission): Json<Submission>,
) -> Result<Json<SubmissionReceipt>, SubmissionError> {
    accept(&state, SubmissionKind::Signup, submission).map(Json)
}

/// POST /api/contact
async fn contact_handler(
    State(state): State<Arc<SubmissionApiState>>,
    Json(submission): Json<Submission>,
) -> Result<Json<SubmissionReceipt>, SubmissionError> {
    accept(&state, SubmissionKind::Contact, submission).map(Json)
}

/// Validate a payload for the given endpoint and issue a receipt.
///
/// Only field names are logged; values may contain passwords.
fn accept(
    state: &SubmissionApiState,
    expected: SubmissionKind,
    submission: Submission,
) -> Result<SubmissionReceipt, SubmissionError> {
    if !state.config.accept_submissions {
        tracing::warn!("Rejected {} submission: submissions closed", expected);
        return Err(SubmissionError::Closed);
    }

    if submission.kind != expected {
        tracing::warn!(
            "Rejected {} submission sent to {} endpoint",
            submission.kind,
            expected
        );
        return Err(SubmissionError::WrongKind {
            expected,
            actual: submission.kind,
        });
    }

    let level = match expected {
        SubmissionKind::Signup => state.config.signup_policy,
        _ => ValidationLevel::Standard,
    };

    if let Err(errors) = submission.validate(level, &ValidationContext::now()) {
        let fields: Vec<&str> = errors.iter().map(|(name, _)| name).collect();
        tracing::warn!("Rejected {} submission, invalid fields: {:?}", expected, fields);
        return Err(SubmissionError::Invalid(errors));
    }

    let receipt = SubmissionReceipt::new(expected);
    tracing::info!(
        "Accepted {} submission {} with fields {:?}",
        expected,
        receipt.id,
        submission.field_names()
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn router(signup_policy: ValidationLevel, accept_submissions: bool) -> Router {
        submission_api_router(SubmissionApiState {
            config: Config {
                signup_policy,
                accept_submissions,
            },
        })
    }

    async fn post_json(router: Router, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn signup_body(senha: &str) -> Value {
        json!({
            "kind": "signup",
            "fields": {
                "nome": "Ana",
                "sobrenome": "Lima",
                "cpf": "123.456.789-01",
                "data_nascimento": "2001-05-20",
                "cep": "01310-100",
                "endereco": "Av. Paulista, 1000",
                "cidade": "São Paulo",
                "estado": "SP",
                "pais": "Brasil",
                "telefone": "(11) 98765-4321",
                "usuario": "ana_lima",
                "email": "ana@diix.com",
                "senha": senha,
                "confirmar_senha": senha,
                "referencia": "",
                "cupom": "",
                "nivel_conhecimento": "basico",
                "interesses": ["programacao"]
            }
        })
    }

    #[tokio::test]
    async fn test_login_accepted() {
        let body = json!({
            "kind": "login",
            "fields": { "email": "ana@diix.com", "password": "segredo" }
        });
        let (status, json) = post_json(router(ValidationLevel::Standard, true), "/api/auth/login", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["kind"], "login");
        assert!(json["id"].as_str().is_some_and(|id| uuid::Uuid::parse_str(id).is_ok()));
    }

    #[tokio::test]
    async fn test_invalid_fields_return_422() {
        let body = json!({
            "kind": "contact",
            "fields": { "nome": "A", "email": "ana@diix.com", "assunto": "Oi", "mensagem": "curta" }
        });
        let (status, json) = post_json(router(ValidationLevel::Standard, true), "/api/contact", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "INVALID_FIELDS");
        assert!(json["fields"]["nome"].is_string());
        assert!(json["fields"]["assunto"].is_string());
        assert!(json["fields"]["mensagem"].is_string());
        assert!(json["fields"].get("email").is_none());
    }

    #[tokio::test]
    async fn test_signup_policy_is_enforced() {
        let (status, _) = post_json(
            router(ValidationLevel::Standard, true),
            "/api/auth/signup",
            signup_body("segredo"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = post_json(
            router(ValidationLevel::Strict, true),
            "/api/auth/signup",
            signup_body("segredo"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["fields"]["senha"].is_string());

        let (status, _) = post_json(
            router(ValidationLevel::Strict, true),
            "/api/auth/signup",
            signup_body("Segredo1!"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_closed_returns_503() {
        let body = json!({
            "kind": "login",
            "fields": { "email": "ana@diix.com", "password": "segredo" }
        });
        let (status, json) = post_json(router(ValidationLevel::Standard, false), "/api/auth/login", body).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["code"], "SUBMISSIONS_CLOSED");
    }

    #[tokio::test]
    async fn test_wrong_kind_rejected() {
        let body = json!({
            "kind": "contact",
            "fields": { "email": "ana@diix.com", "password": "segredo" }
        });
        let (status, json) = post_json(router(ValidationLevel::Standard, true), "/api/auth/login", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "WRONG_KIND");
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let request = Request::post("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = router(ValidationLevel::Standard, true)
            .oneshot(request)
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SubmissionError::Closed.to_string(), "Cadastro temporariamente indisponível");
        let err = SubmissionError::WrongKind {
            expected: SubmissionKind::Login,
            actual: SubmissionKind::Contact,
        };
        assert_eq!(err.to_string(), "Formulário contact enviado para o endpoint de login");
    }
}
