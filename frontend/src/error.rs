//! Error type shared by the REST client, the session helpers and the command
//! executors.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// 401 from any endpoint. Treated as session expiry.
    #[error("Sessão expirada. Faça login novamente.")]
    Unauthorized,

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Falha de rede: {0}")]
    Network(String),

    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),

    #[error("Configuração inválida: {0}")]
    Config(String),
}

impl ApiError {
    /// Build an error for a non-success status, preferring the backend's
    /// `{"detail": "..."}` message when there is one.
    pub fn from_status(status: u16, status_text: &str, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }

        let message = detail_message(body).unwrap_or_else(|| match status {
            400 => "Requisição inválida. Verifique os dados informados.".to_string(),
            404 => "Recurso não encontrado.".to_string(),
            409 => "Registro já existe.".to_string(),
            422 => "Dados inválidos. Verifique o formulário.".to_string(),
            500..=599 => format!("Erro no servidor ({} {})", status, status_text),
            _ => format!("Falha na requisição: {} {}", status, status_text),
        });

        ApiError::Http { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// FastAPI-style error bodies: `detail` is either a string or a list of
// validation entries carrying `msg`.
fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(text)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_status_maps_to_session_expiry() {
        let err = ApiError::from_status(401, "Unauthorized", "");
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn string_detail_is_surfaced() {
        let err = ApiError::from_status(400, "Bad Request", r#"{"detail":"Aluno não encontrado"}"#);
        assert_eq!(err.to_string(), "Aluno não encontrado");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn validation_detail_list_is_joined() {
        let body = r#"{"detail":[{"loc":["body","nome"],"msg":"field required"},{"msg":"too short"}]}"#;
        let err = ApiError::from_status(422, "Unprocessable Entity", body);
        assert_eq!(err.to_string(), "field required; too short");
    }

    #[test]
    fn fallback_message_when_body_is_not_json() {
        let err = ApiError::from_status(503, "Service Unavailable", "<html>");
        assert_eq!(err.to_string(), "Erro no servidor (503 Service Unavailable)");
    }
}
