use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Employee,
}

impl Role {
    /// Where a freshly signed-in user lands.
    pub fn dashboard(self) -> &'static str {
        match self {
            Role::Customer => "/customer/dashboard",
            Role::Employee => "/employee/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Employee => write!(f, "employee"),
        }
    }
}

/// Authenticated identity. Never carries the password.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// A row of the credential store.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl From<&StoredUser> for Principal {
    fn from(user: &StoredUser) -> Self {
        Principal {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RLogin {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub user: Principal,
    pub expires: String,
    pub redirect: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RRegister {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    pub role: Option<Role>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RedirectRes {
    pub redirect: String,
}
