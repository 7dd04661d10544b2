use async_trait::async_trait;

use crate::types::user::{Principal, Role, StoredUser};

/// Where principals come from. Swapping the demo table for a real store
/// touches nothing but the value handed to the app.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn lookup(&self, email: &str) -> Option<StoredUser>;
}

#[derive(Clone, Debug)]
pub struct StaticUserStore {
    users: Vec<StoredUser>,
}

impl StaticUserStore {
    pub fn new(users: Vec<StoredUser>) -> Self {
        Self { users }
    }

    /// The two demo accounts.
    pub fn demo() -> Self {
        Self::new(vec![
            StoredUser {
                id: "1".to_string(),
                email: "customer@example.com".to_string(),
                password: "customer123".to_string(),
                name: "Jane Customer".to_string(),
                role: Role::Customer,
            },
            StoredUser {
                id: "2".to_string(),
                email: "employee@example.com".to_string(),
                password: "employee123".to_string(),
                name: "John Employee".to_string(),
                role: Role::Employee,
            },
        ])
    }
}

#[async_trait]
impl UserStore for StaticUserStore {
    async fn lookup(&self, email: &str) -> Option<StoredUser> {
        self.users.iter().find(|u| u.email == email).cloned()
    }
}

/// Exact match on both fields. `None` says nothing about which one was wrong.
pub async fn authenticate(store: &dyn UserStore, email: &str, password: &str) -> Option<Principal> {
    if email.is_empty() || password.is_empty() {
        return None;
    }

    let user = store.lookup(email).await?;
    if user.password != password {
        return None;
    }

    Some(Principal::from(&user))
}
