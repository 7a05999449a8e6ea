use contracts::shared::errors::AppError;

/// Text shown for a failed call: the server's own message when it sent one,
/// otherwise the Spanish message for the error code.
pub fn failure_message(err: &AppError) -> String {
    match err {
        AppError::Api(e) if !e.message.starts_with("HTTP ") => e.message.clone(),
        AppError::Auth(e) => e.message.clone(),
        _ => err.user_message(),
    }
}

/// Lifecycle of data fetched by a page
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed {
        /// Text shown to the administrator
        message: String,
        /// Whether a "Reintentar" control is offered
        recoverable: bool,
    },
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::failed(&err),
        }
    }

    pub fn failed(err: &AppError) -> Self {
        LoadState::Failed {
            message: failure_message(err),
            recoverable: err.is_recoverable(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<(&str, bool)> {
        match self {
            LoadState::Failed {
                message,
                recoverable,
            } => Some((message.as_str(), *recoverable)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::errors::{ApiError, NetworkError};

    #[test]
    fn test_from_result() {
        let ready: LoadState<u32> = LoadState::from_result(Ok(3));
        assert_eq!(ready.ready(), Some(&3));
        assert!(!ready.is_loading());

        let failed: LoadState<u32> =
            LoadState::from_result(Err(AppError::Network(NetworkError::default())));
        assert_eq!(
            failed.error(),
            Some(("Error de conexión. Verifica tu conexión a internet", true))
        );
    }

    #[test]
    fn test_server_message_is_kept() {
        let failed: LoadState<u32> =
            LoadState::failed(&AppError::Api(ApiError::new("Usuario no encontrado", 404)));
        assert_eq!(failed.error(), Some(("Usuario no encontrado", false)));

        let generic: LoadState<u32> =
            LoadState::failed(&AppError::Api(ApiError::new("HTTP 500: Internal Server Error", 500)));
        assert_eq!(
            generic.error(),
            Some(("Error del servidor. Intenta nuevamente", true))
        );
    }
}
