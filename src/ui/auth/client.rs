//! Browser side of the submission API

use crate::core::submission::{ApiError, Submission, SubmissionReceipt};

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("Falha de conexão. Tente novamente.")]
    Network(String),

    #[error("{}", .0.error)]
    Rejected(ApiError),

    #[error("Resposta inesperada do servidor")]
    Decode(String),
}

impl ClientError {
    /// Field-scoped messages sent back by the server, if any
    pub fn field_messages(&self) -> Option<&std::collections::BTreeMap<String, String>> {
        match self {
            ClientError::Rejected(err) if !err.fields.is_empty() => Some(&err.fields),
            _ => None,
        }
    }
}

/// POST the payload to the endpoint for its kind
#[cfg(not(feature = "ssr"))]
pub async fn send_submission(submission: &Submission) -> Result<SubmissionReceipt, ClientError> {
    use gloo_net::http::Request;

    let response = Request::post(submission.kind.endpoint())
        .header("Content-Type", "application/json")
        .json(submission)
        .map_err(|e| ClientError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<SubmissionReceipt>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let err = response
            .json::<ApiError>()
            .await
            .unwrap_or_else(|_| ApiError::new(format!("Erro {}", status), "HTTP_ERROR"));
        Err(ClientError::Rejected(err))
    }
}

#[cfg(feature = "ssr")]
pub async fn send_submission(_submission: &Submission) -> Result<SubmissionReceipt, ClientError> {
    Err(ClientError::Network("Submission not available on server".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_rejected_shows_server_message() {
        let err = ClientError::Rejected(ApiError::new("Cadastro temporariamente indisponível", "SUBMISSIONS_CLOSED"));
        assert_eq!(err.to_string(), "Cadastro temporariamente indisponível");
        assert!(err.field_messages().is_none());
    }

    #[test]
    fn test_field_messages() {
        let mut fields = BTreeMap::new();
        fields.insert("senha".to_string(), "Senha deve conter pelo menos um número".to_string());
        let err = ClientError::Rejected(ApiError::new("Dados inválidos", "INVALID_FIELDS").with_fields(fields));

        let messages = err.field_messages().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages.contains_key("senha"));
    }

    #[test]
    fn test_network_message_hides_details() {
        let err = ClientError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Falha de conexão. Tente novamente.");
    }
}
