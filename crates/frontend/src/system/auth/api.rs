use contracts::shared::errors::{AppError, AuthError, AuthErrorCode};
use contracts::system::auth::{AdminLogin, LoginRequest, LoginResponse, StaffCheckResponse};

use crate::shared::api::{envelope, ApiClient};

const NOT_STAFF_MESSAGE: &str = "No tienes permisos de administrador";

const INVALID_LOGIN_RESPONSE: &str = "Respuesta inválida del servidor";

/// Signs in and stores the returned token in the session.
///
/// Any failure clears the stored token, so a stale session never survives a
/// rejected login.
pub async fn login(client: &ApiClient, credentials: &LoginRequest) -> Result<LoginResponse, AppError> {
    match request_token(client, credentials).await {
        Ok(login) => {
            client.session().set_token(&login.access_token);
            log::info!("Signed in as {}", credentials.email);
            Ok(login)
        }
        Err(e) => {
            client.session().clear();
            Err(e)
        }
    }
}

async fn request_token(client: &ApiClient, credentials: &LoginRequest) -> Result<LoginResponse, AppError> {
    let response = client.post("/api/auth/login", credentials).await?;
    let login: LoginResponse = envelope::required(response, "Inicio de sesión")?;

    if login.access_token.is_empty() {
        return Err(AuthError::new(INVALID_LOGIN_RESPONSE, AuthErrorCode::InvalidToken)
            .with_status(500)
            .into());
    }
    Ok(login)
}

pub async fn check_staff_status(client: &ApiClient) -> Result<StaffCheckResponse, AppError> {
    let response = client.get("/api/support/admin/check-staff").await?;
    envelope::required(response, "Verificación de staff")
}

/// Login restricted to staff accounts.
///
/// Any failure after the credentials were accepted ends the session again,
/// so a non-staff token never stays stored.
pub async fn login_as_admin(
    client: &ApiClient,
    credentials: &LoginRequest,
) -> Result<AdminLogin, AppError> {
    let login = login(client, credentials).await?;

    let staff = match check_staff_status(client).await {
        Ok(staff) => staff,
        Err(e) => {
            logout(client);
            return Err(e);
        }
    };

    if !staff.is_staff {
        logout(client);
        return Err(AuthError::new(NOT_STAFF_MESSAGE, AuthErrorCode::NotStaff)
            .with_status(403)
            .into());
    }

    Ok(AdminLogin { login, staff })
}

pub fn logout(client: &ApiClient) {
    client.session().clear();
    log::info!("Signed out");
}

pub fn is_authenticated(client: &ApiClient) -> bool {
    client.session().is_authenticated()
}

pub fn token(client: &ApiClient) -> Option<String> {
    client.session().token()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::session::SessionStore;
    use crate::shared::api::testing::{test_client, MockTransport};
    use serde_json::json;

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "admin@pololitos.cl".to_string(),
            password: "secreto".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_as_admin_success() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"accessToken": "tok-1", "user": {"id": 1, "name": "Ana", "email": "admin@pololitos.cl"}}));
        transport.push_json(200, json!({"isStaff": true, "role": "ADMIN"}));
        let (client, session, _) = test_client(transport.clone());

        let result = login_as_admin(&client, &credentials()).await.unwrap();

        assert_eq!(result.staff.role, "ADMIN");
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert!(is_authenticated(&client));
        let requests = transport.requests();
        assert_eq!(requests[1].header("Authorization"), Some("Bearer tok-1"));
    }

    #[tokio::test]
    async fn test_forbidden_staff_check_clears_token() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"accessToken": "tok-2"}));
        transport.push_json(403, json!({"error": "No tienes permisos de administrador"}));
        let (client, session, _) = test_client(transport);

        let err = login_as_admin(&client, &credentials()).await.unwrap_err();

        assert!(err.is_auth());
        assert_eq!(err.message(), "No tienes permisos de administrador");
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn test_non_staff_is_rejected() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"accessToken": "tok-3"}));
        transport.push_json(200, json!({"isStaff": false, "role": "USER"}));
        let (client, session, _) = test_client(transport);

        let err = login_as_admin(&client, &credentials()).await.unwrap_err();

        assert_eq!(err.code(), AuthErrorCode::NotStaff.code());
        assert_eq!(err.status(), Some(403));
        assert_eq!(token(&client), None);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_without_token_is_rejected() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"message": "ok"}));
        let (client, session, _) = test_client(transport);
        session.set_token("old-token");

        let err = login(&client, &credentials()).await.unwrap_err();

        assert!(err.is_auth());
        assert_eq!(err.code(), AuthErrorCode::InvalidToken.code());
        assert_eq!(err.message(), "Respuesta inválida del servidor");
        assert_eq!(err.status(), Some(500));
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn test_network_failure_clears_previous_token() {
        let transport = MockTransport::new();
        transport.push_network_failure("connection refused");
        let (client, session, navigator) = test_client(transport);
        session.set_token("old-token");

        let err = login(&client, &credentials()).await.unwrap_err();

        assert!(err.is_network());
        assert_eq!(session.token(), None);
        assert!(!is_authenticated(&client));
        assert!(navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let transport = MockTransport::new();
        transport.push_json(401, json!({"error": "Credenciales inválidas", "code": "INVALID_CREDENTIALS"}));
        let (client, _, navigator) = test_client(transport);

        let err = login_as_admin(&client, &credentials()).await.unwrap_err();

        assert_eq!(err.code(), "INVALID_CREDENTIALS");
        assert_eq!(err.message(), "Credenciales inválidas");
        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
    }
}
