use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Missing or empty when the server rejects the login without an error status
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCheckResponse {
    pub is_staff: bool,
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Result of a successful administrator login
#[derive(Debug, Clone, PartialEq)]
pub struct AdminLogin {
    pub login: LoginResponse,
    pub staff: StaffCheckResponse,
}
