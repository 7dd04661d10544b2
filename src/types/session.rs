use serde::{Deserialize, Serialize};

use crate::types::user::{Principal, Role};

/// Claims carried in the signed session token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl SessionClaims {
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.sub.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// `GET /api/auth/session` body. Serializes to `{}` without a session.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SessionRes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Principal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}
