//! Response envelope adapters.
//!
//! Admin endpoints answer in a few different shapes. Each service names the
//! shape of its endpoint by calling one of these functions; a body that does
//! not match becomes [`AppError::InvalidResponse`] carrying `context`.

use contracts::shared::errors::{ApiError, AppError};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{log_error, ApiResponse};

fn invalid(context: &str, reason: impl std::fmt::Display) -> AppError {
    let err = AppError::InvalidResponse(format!("{}: {}", context, reason));
    log_error(&err, context);
    err
}

fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| invalid(context, e))
}

fn success_flag(body: &Value) -> bool {
    body.get("success").and_then(Value::as_bool).unwrap_or(false)
}

/// `{ "success": true, "data": T }` → `T`
pub fn success_data<T: DeserializeOwned>(response: ApiResponse, context: &str) -> Result<T, AppError> {
    match response.data {
        Some(mut body) if success_flag(&body) => {
            let data = body.get_mut("data").map(Value::take).unwrap_or(Value::Null);
            decode(data, context)
        }
        _ => Err(invalid(context, "formato de respuesta inválido")),
    }
}

/// `{ "success": true, ... }` → the whole body as `T`
pub fn success_body<T: DeserializeOwned>(response: ApiResponse, context: &str) -> Result<T, AppError> {
    match response.data {
        Some(body) if success_flag(&body) => decode(body, context),
        _ => Err(invalid(context, "formato de respuesta inválido")),
    }
}

/// Bare payload that must be present
pub fn required<T: DeserializeOwned>(response: ApiResponse, context: &str) -> Result<T, AppError> {
    match response.data {
        Some(Value::Null) | None => Err(invalid(context, "no se recibieron datos")),
        Some(body) => decode(body, context),
    }
}

/// Bare payload, `T::default()` when the server sent nothing
pub fn or_default<T: DeserializeOwned + Default>(
    response: ApiResponse,
    context: &str,
) -> Result<T, AppError> {
    match response.data {
        Some(Value::Null) | None => Ok(T::default()),
        Some(body) => decode(body, context),
    }
}

/// `{ "success": bool, "message"?: string }`; returns the server message.
///
/// `success: false` is reported as an API error with the server's message.
pub fn acknowledged(response: ApiResponse, context: &str) -> Result<Option<String>, AppError> {
    let body = response.data.unwrap_or(Value::Null);
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);

    if success_flag(&body) {
        return Ok(message);
    }

    let err = AppError::Api(ApiError::new(
        message.unwrap_or_else(|| format!("{}: operación rechazada", context)),
        response.status,
    ));
    log_error(&err, context);
    Err(err)
}

/// Body ignored, only the success status matters
pub fn discard(_response: ApiResponse) {}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::errors::INVALID_RESPONSE;
    use serde_json::json;

    fn ok(data: Option<Value>) -> ApiResponse {
        ApiResponse { data, status: 200 }
    }

    #[test]
    fn test_success_data() {
        let value: Vec<u32> =
            success_data(ok(Some(json!({"success": true, "data": [1, 2]}))), "ctx").unwrap();
        assert_eq!(value, vec![1, 2]);

        let err = success_data::<Vec<u32>>(ok(Some(json!({"success": false}))), "Usuarios").unwrap_err();
        assert_eq!(err.code(), INVALID_RESPONSE);
        assert!(err.message().starts_with("Usuarios"));
    }

    #[test]
    fn test_shape_mismatch() {
        let err = success_data::<Vec<u32>>(
            ok(Some(json!({"success": true, "data": {"not": "a list"}}))),
            "ctx",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }

    #[test]
    fn test_required_and_or_default() {
        assert!(required::<Vec<u32>>(ok(None), "ctx").is_err());
        assert!(required::<Vec<u32>>(ok(Some(Value::Null)), "ctx").is_err());
        assert_eq!(required::<Vec<u32>>(ok(Some(json!([3]))), "ctx").unwrap(), vec![3]);

        assert_eq!(or_default::<Vec<u32>>(ok(None), "ctx").unwrap(), Vec::<u32>::new());
        assert_eq!(or_default::<Vec<u32>>(ok(Some(json!([4]))), "ctx").unwrap(), vec![4]);
        assert!(or_default::<Vec<u32>>(ok(Some(json!("x"))), "ctx").is_err());
    }

    #[test]
    fn test_acknowledged() {
        let message = acknowledged(
            ok(Some(json!({"success": true, "message": "Usuario bloqueado"}))),
            "ctx",
        )
        .unwrap();
        assert_eq!(message.as_deref(), Some("Usuario bloqueado"));

        let err = acknowledged(
            ok(Some(json!({"success": false, "message": "Estado inválido"}))),
            "ctx",
        )
        .unwrap_err();
        assert_eq!(err.message(), "Estado inválido");
        assert_eq!(err.status(), Some(200));
    }
}
