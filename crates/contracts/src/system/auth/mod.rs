use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Umkm,
    Buyer,
    Forwarder,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
}

impl UserInfo {
    pub fn is_buyer(&self) -> bool {
        self.role == UserRole::Buyer
    }

    pub fn is_forwarder(&self) -> bool {
        self.role == UserRole::Forwarder
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
