//! Authentication wire types
//!
//! The backend speaks Spanish field names (`correo`, `nombre`, `usuario`...);
//! these types expose English names on the Rust side and rename on the wire.

use serde::{Deserialize, Serialize};

/// Role string the backend assigns to administrators
pub const ADMIN_ROLE: &str = "ADMIN_ROLE";

/// Authenticated user as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "uid")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "estado", default)]
    pub active: bool,
    /// Whether the account was created through Google sign-in
    #[serde(rename = "google", default)]
    pub federated_login: bool,
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// `POST /auth/login` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    #[serde(rename = "correo")]
    pub email: String,
    pub password: String,
}

/// `POST /usuarios` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterData {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    pub password: String,
}

/// Response of login, registration and token validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "usuario")]
    pub user: User,
}
