//! Error taxonomy returned by the admin API client.
//!
//! Four families are distinguished:
//! - [`ApiError`]: the server answered with a non-success status
//! - [`AuthError`]: authentication/authorization failures (401, 403, login checks)
//! - [`NetworkError`]: the request never reached a server
//! - [`ValidationError`]: client-side input checks
//!
//! Every error converts into a flat [`ErrorRecord`] for logging, and maps its
//! code to a Spanish user-facing message through [`error_message`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use thiserror::Error;

pub const API_ERROR: &str = "API_ERROR";
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const INVALID_RESPONSE: &str = "INVALID_RESPONSE";

/// Fallback shown when a code has no entry in the message table.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Ha ocurrido un error inesperado";

/// Causes of an authentication or authorization failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthErrorCode {
    InvalidCredentials,
    Unauthorized,
    Forbidden,
    TokenExpired,
    InvalidToken,
    SessionExpired,
    NotStaff,
    NotAdmin,
}

impl AuthErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            AuthErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthErrorCode::Unauthorized => "UNAUTHORIZED",
            AuthErrorCode::Forbidden => "FORBIDDEN",
            AuthErrorCode::TokenExpired => "TOKEN_EXPIRED",
            AuthErrorCode::InvalidToken => "INVALID_TOKEN",
            AuthErrorCode::SessionExpired => "SESSION_EXPIRED",
            AuthErrorCode::NotStaff => "NOT_STAFF",
            AuthErrorCode::NotAdmin => "NOT_ADMIN",
        }
    }

    pub fn all() -> Vec<AuthErrorCode> {
        vec![
            AuthErrorCode::InvalidCredentials,
            AuthErrorCode::Unauthorized,
            AuthErrorCode::Forbidden,
            AuthErrorCode::TokenExpired,
            AuthErrorCode::InvalidToken,
            AuthErrorCode::SessionExpired,
            AuthErrorCode::NotStaff,
            AuthErrorCode::NotAdmin,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

/// Server responded with a non-success status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    pub code: Option<String>,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
            code: None,
            details: None,
        }
    }

    /// Builds the error from a failed response.
    ///
    /// The message is the server's `error` field, then its `message` field,
    /// then `HTTP <status>: <status text>`. The raw payload is kept as details.
    pub fn from_response(status: u16, status_text: &str, body: Option<&Value>) -> Self {
        let text_field = |name: &str| {
            body.and_then(|b| b.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let message = text_field("error")
            .or_else(|| text_field("message"))
            .unwrap_or_else(|| format!("HTTP {}: {}", status, status_text));

        Self {
            message,
            status,
            code: text_field("code"),
            details: body.cloned(),
        }
    }
}

/// Authentication / authorization failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthError {
    pub message: String,
    pub code: AuthErrorCode,
    pub status: Option<u16>,
    pub details: Option<Value>,
}

impl AuthError {
    pub fn new(message: impl Into<String>, code: AuthErrorCode) -> Self {
        Self {
            message: message.into(),
            code,
            status: None,
            details: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// The request could not reach the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkError {
    pub message: String,
    pub details: Option<Value>,
}

impl NetworkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }
}

impl Default for NetworkError {
    fn default() -> Self {
        Self::new("Error de conexión")
    }
}

/// Client-side input validation failure, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn add_field(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.fields.is_empty()
    }

    /// First message recorded for `field`, if any.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("{}", .0.message)]
    Api(ApiError),
    #[error("{}", .0.message)]
    Auth(AuthError),
    #[error("{}", .0.message)]
    Network(NetworkError),
    #[error("{}", .0.message)]
    Validation(ValidationError),
    /// The response arrived but did not have the shape the endpoint promises
    #[error("{0}")]
    InvalidResponse(String),
}

impl AppError {
    /// Classifies a failed response: 401 and 403 become auth errors, everything
    /// else stays an API error. Both keep the HTTP status.
    pub fn from_response(status: u16, status_text: &str, body: Option<&Value>) -> Self {
        let api = ApiError::from_response(status, status_text, body);
        let auth_code = match status {
            401 => Some(AuthErrorCode::Unauthorized),
            403 => Some(AuthErrorCode::Forbidden),
            _ => None,
        };

        match auth_code {
            Some(fallback) => {
                let code = api
                    .code
                    .as_deref()
                    .and_then(AuthErrorCode::from_code)
                    .unwrap_or(fallback);
                AppError::Auth(AuthError {
                    message: api.message,
                    code,
                    status: Some(status),
                    details: api.details,
                })
            }
            None => AppError::Api(api),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AppError::Api(_) => "ApiError",
            AppError::Auth(_) => "AuthError",
            AppError::Network(_) => "NetworkError",
            AppError::Validation(_) => "ValidationError",
            AppError::InvalidResponse(_) => "InvalidResponseError",
        }
    }

    pub fn code(&self) -> &str {
        match self {
            AppError::Api(e) => e.code.as_deref().unwrap_or(API_ERROR),
            AppError::Auth(e) => e.code.code(),
            AppError::Network(_) => NETWORK_ERROR,
            AppError::Validation(_) => VALIDATION_ERROR,
            AppError::InvalidResponse(_) => INVALID_RESPONSE,
        }
    }

    /// HTTP status associated with the error; network failures report 0.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api(e) => Some(e.status),
            AppError::Auth(e) => e.status,
            AppError::Network(_) => Some(0),
            AppError::Validation(_) => Some(400),
            AppError::InvalidResponse(_) => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Api(e) => &e.message,
            AppError::Auth(e) => &e.message,
            AppError::Network(e) => &e.message,
            AppError::Validation(e) => &e.message,
            AppError::InvalidResponse(message) => message,
        }
    }

    pub fn details(&self) -> Option<Value> {
        match self {
            AppError::Api(e) => e.details.clone(),
            AppError::Auth(e) => e.details.clone(),
            AppError::Network(e) => e.details.clone(),
            AppError::Validation(e) => Some(json!({ "fields": e.fields })),
            AppError::InvalidResponse(_) => None,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Auth(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    /// Network failures and 5xx responses may succeed when retried.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Network(_) => true,
            AppError::Api(e) => e.status >= 500,
            AppError::Auth(e) => e.status.map(|s| s >= 500).unwrap_or(false),
            _ => false,
        }
    }

    /// Spanish message for the error code, or the generic fallback.
    pub fn user_message(&self) -> String {
        error_message(self.code())
            .unwrap_or(UNKNOWN_ERROR_MESSAGE)
            .to_string()
    }

    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord {
            name: self.name().to_string(),
            message: self.message().to_string(),
            code: self.code().to_string(),
            status: self.status(),
            details: self.details(),
        }
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        AppError::Network(e)
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

/// Flat, serializable form of an [`AppError`] used in log lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub name: String,
    pub message: String,
    pub code: String,
    pub status: Option<u16>,
    pub details: Option<Value>,
}

/// Spanish user-facing message for a known error code
pub fn error_message(code: &str) -> Option<&'static str> {
    let message = match code {
        "INVALID_CREDENTIALS" => "Email o contraseña incorrectos",
        "UNAUTHORIZED" => "No autorizado. Por favor, inicia sesión",
        "FORBIDDEN" => "No tienes permisos para realizar esta acción",
        "TOKEN_EXPIRED" => "Tu sesión ha expirado. Por favor, inicia sesión nuevamente",
        "INVALID_TOKEN" => "Token de sesión inválido",
        "SESSION_EXPIRED" => "Tu sesión ha expirado",
        "NOT_STAFF" => "No tienes permisos de administrador",
        "NOT_ADMIN" => "Solo los administradores pueden acceder",

        "NETWORK_ERROR" => "Error de conexión. Verifica tu conexión a internet",
        "TIMEOUT_ERROR" => "La solicitud ha tardado demasiado",

        "API_ERROR" => "Error del servidor. Intenta nuevamente",
        "SERVICE_UNAVAILABLE" => {
            "Servicio no disponible. Verifica que el backend esté ejecutándose"
        }

        "VALIDATION_ERROR" => "Por favor, verifica los datos ingresados",
        "INVALID_EMAIL" => "El formato del email no es válido",
        "INVALID_PASSWORD" => "La contraseña debe tener al menos 6 caracteres",

        "UNKNOWN_ERROR" => UNKNOWN_ERROR_MESSAGE,
        _ => return None,
    };
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_message_precedence() {
        let body = json!({ "error": "primero", "message": "segundo" });
        let e = ApiError::from_response(500, "Internal Server Error", Some(&body));
        assert_eq!(e.message, "primero");

        let body = json!({ "message": "segundo", "code": "DB_DOWN" });
        let e = ApiError::from_response(500, "Internal Server Error", Some(&body));
        assert_eq!(e.message, "segundo");
        assert_eq!(e.code.as_deref(), Some("DB_DOWN"));

        let e = ApiError::from_response(502, "Bad Gateway", None);
        assert_eq!(e.message, "HTTP 502: Bad Gateway");
        assert!(e.details.is_none());
    }

    #[test]
    fn test_status_is_preserved_for_every_family() {
        for status in [400u16, 401, 403, 404, 409, 422, 500, 503] {
            let err = AppError::from_response(status, "x", None);
            assert_eq!(err.status(), Some(status), "status {}", status);
        }
    }

    #[test]
    fn test_401_and_403_are_auth_errors() {
        let body = json!({ "error": "No tienes permisos de administrador" });
        let err = AppError::from_response(403, "Forbidden", Some(&body));
        match &err {
            AppError::Auth(auth) => {
                assert_eq!(auth.code, AuthErrorCode::Forbidden);
                assert_eq!(auth.message, "No tienes permisos de administrador");
            }
            other => panic!("expected auth error, got {:?}", other),
        }

        let body = json!({ "error": "expired", "code": "TOKEN_EXPIRED" });
        let err = AppError::from_response(401, "Unauthorized", Some(&body));
        assert_eq!(err.code(), "TOKEN_EXPIRED");

        let err = AppError::from_response(404, "Not Found", None);
        assert!(matches!(err, AppError::Api(_)));
        assert_eq!(err.code(), API_ERROR);
    }

    #[test]
    fn test_user_message_lookup() {
        let err: AppError = AuthError::new("x", AuthErrorCode::NotStaff).into();
        assert_eq!(err.user_message(), "No tienes permisos de administrador");

        let err: AppError = NetworkError::default().into();
        assert_eq!(
            err.user_message(),
            "Error de conexión. Verifica tu conexión a internet"
        );

        let mut api = ApiError::new("boom", 418);
        api.code = Some("TEAPOT".to_string());
        let err: AppError = api.into();
        assert_eq!(err.user_message(), UNKNOWN_ERROR_MESSAGE);

        let err = AppError::InvalidResponse("Invalid response format".to_string());
        assert_eq!(err.user_message(), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(err.to_string(), "Invalid response format");
    }

    #[test]
    fn test_recoverable() {
        assert!(AppError::from(NetworkError::default()).is_recoverable());
        assert!(AppError::from_response(503, "x", None).is_recoverable());
        assert!(!AppError::from_response(404, "x", None).is_recoverable());
        assert!(!AppError::from_response(401, "x", None).is_recoverable());
    }

    #[test]
    fn test_record_serializes() {
        let mut validation = ValidationError::new("Datos inválidos");
        validation.add_field("email", "El formato del email no es válido");
        let err: AppError = validation.into();

        let record = err.to_record();
        assert_eq!(record.name, "ValidationError");
        assert_eq!(record.code, VALIDATION_ERROR);
        assert_eq!(record.status, Some(400));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value["details"]["fields"]["email"][0],
            "El formato del email no es válido"
        );
    }

    #[test]
    fn test_auth_code_round_trip_through_table() {
        for code in AuthErrorCode::all() {
            assert_eq!(AuthErrorCode::from_code(code.code()), Some(code));
            assert!(error_message(code.code()).is_some());
        }
    }
}
