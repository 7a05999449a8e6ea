use web_sys::window;

use crate::shared::api::session::SessionStore;

const ACCESS_TOKEN_KEY: &str = "accessToken";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Session persisted in `localStorage["accessToken"]`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl SessionStore for LocalStorageSession {
    fn token(&self) -> Option<String> {
        get_local_storage()?
            .get_item(ACCESS_TOKEN_KEY)
            .ok()?
            .filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}
