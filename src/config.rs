use std::env;

use crate::types::error::ConfigError;

pub const DEFAULT_APP_NAME: &str = "Serene Spa";
/// 30 days.
pub const DEFAULT_SESSION_MAX_AGE: i64 = 30 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub webhook_url: Option<String>,
    pub auth_url: String,
    pub auth_secret: String,
    pub app_name: String,
    pub session_max_age: i64,
}

impl EnvConfig {
    fn get_env(key: &str) -> Option<String> {
        env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let port = match Self::get_env("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT", raw))?,
            None => 8080,
        };

        let session_max_age = match Self::get_env("SESSION_MAX_AGE") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::Invalid("SESSION_MAX_AGE", raw)),
            },
            None => DEFAULT_SESSION_MAX_AGE,
        };

        Ok(EnvConfig {
            port,
            webhook_url: Self::get_env("NEXT_PUBLIC_N8N_WEBHOOK_URL").map(normalize_base_url),
            auth_url: Self::get_env("NEXTAUTH_URL")
                .unwrap_or_else(|| format!("http://localhost:{port}")),
            auth_secret: Self::get_env("NEXTAUTH_SECRET").unwrap_or_default(),
            app_name: Self::get_env("NEXT_PUBLIC_APP_NAME")
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            session_max_age,
        })
    }

    /// Startup check. The server does not come up half-configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webhook_url.is_none() {
            return Err(ConfigError::Missing("NEXT_PUBLIC_N8N_WEBHOOK_URL"));
        }
        if self.auth_secret.is_empty() {
            return Err(ConfigError::Missing("NEXTAUTH_SECRET"));
        }
        Ok(())
    }

    /// Session cookies only get `Secure` when the portal is served over https.
    pub fn secure_cookies(&self) -> bool {
        self.auth_url.starts_with("https://")
    }
}

pub fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
