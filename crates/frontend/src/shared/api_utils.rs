//! API endpoint configuration
//!
//! Values are baked in at build time from public environment variables,
//! so a deployed bundle always talks to the backend it was built for.

const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
const DEVELOPMENT: &str = "development";
const DEV_PREFIX: &str = "/dev";

/// Where and how the admin API is reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub environment: String,
    pub gateway_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            environment: String::new(),
            gateway_key: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, environment: impl Into<String>, gateway_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            environment: environment.into(),
            gateway_key: gateway_key.filter(|k| !k.is_empty()),
        }
    }

    /// Reads `POLOLITOS_PUBLIC_API_URL`, `POLOLITOS_PUBLIC_ENV` and
    /// `POLOLITOS_PUBLIC_API_GATEWAY_KEY` as captured by the compiler.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("POLOLITOS_PUBLIC_API_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_API_URL),
            option_env!("POLOLITOS_PUBLIC_ENV").unwrap_or_default(),
            option_env!("POLOLITOS_PUBLIC_API_GATEWAY_KEY").map(str::to_string),
        )
    }

    pub fn is_development(&self) -> bool {
        self.environment == DEVELOPMENT
    }

    /// Full URL of `endpoint`: base URL, then `/dev` in development, then the
    /// endpoint with a leading `/` added when missing.
    ///
    /// ```ignore
    /// let config = ApiConfig::new("https://api.pololitos.cl", "development", None);
    /// assert_eq!(config.build_url("api/admin/users"), "https://api.pololitos.cl/dev/api/admin/users");
    /// ```
    pub fn build_url(&self, endpoint: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = if self.is_development() { DEV_PREFIX } else { "" };
        if endpoint.starts_with('/') {
            format!("{}{}{}", base, prefix, endpoint)
        } else {
            format!("{}{}/{}", base, prefix, endpoint)
        }
    }

    /// First characters of the gateway key, for logs.
    pub fn key_preview(&self) -> String {
        match &self.gateway_key {
            Some(key) => format!("{}...", key.chars().take(10).collect::<String>()),
            None => "MISSING".to_string(),
        }
    }

    pub fn log_summary(&self) {
        log::info!(
            "API configuration: base_url={} development={} api_key={}",
            self.base_url,
            self.is_development(),
            self.key_preview()
        );
        if self.gateway_key.is_none() {
            log::warn!("API gateway key is not configured, requests will likely be rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_production() {
        let config = ApiConfig::new("https://api.pololitos.cl/", "production", None);
        assert_eq!(
            config.build_url("/api/admin/users"),
            "https://api.pololitos.cl/api/admin/users"
        );
        assert_eq!(
            config.build_url("api/admin/users"),
            "https://api.pololitos.cl/api/admin/users"
        );
    }

    #[test]
    fn test_build_url_development() {
        let config = ApiConfig::new("http://127.0.0.1:3000", "development", None);
        assert_eq!(
            config.build_url("/api/auth/login"),
            "http://127.0.0.1:3000/dev/api/auth/login"
        );
    }

    #[test]
    fn test_key_preview() {
        let config = ApiConfig::new("x", "", Some("abcdefghijklmnop".to_string()));
        assert_eq!(config.key_preview(), "abcdefghij...");
        assert_eq!(ApiConfig::new("x", "", Some(String::new())).key_preview(), "MISSING");
    }
}
