use web_sys::window;

pub const LOGIN_PATH: &str = "/login";

/// Hard navigation outside the router (session expiry, downloads)
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
    fn open_new_tab(&self, url: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Some(window) = window() {
            if window.location().set_href(path).is_err() {
                log::error!("Failed to navigate to {}", path);
            }
        }
    }

    fn open_new_tab(&self, url: &str) {
        if let Some(window) = window() {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                log::error!("Failed to open {}", url);
            }
        }
    }
}
