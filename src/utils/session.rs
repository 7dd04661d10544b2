use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;
use uuid::Uuid;

use crate::config::EnvConfig;
use crate::types::session::SessionClaims;
use crate::types::user::Principal;

pub const SESSION_COOKIE: &str = "serene-portal.session-token";

/// Signs and checks session tokens (HS256 over the configured secret).
pub struct SessionService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    max_age: i64,
    secure_cookies: bool,
}

impl SessionService {
    pub fn new(secret: &str, max_age: i64, secure_cookies: bool) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            max_age,
            secure_cookies,
        }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::new(&config.auth_secret, config.session_max_age, config.secure_cookies())
    }

    pub fn claims_for(&self, principal: &Principal) -> SessionClaims {
        let now = Utc::now().timestamp();
        SessionClaims {
            sub: principal.id.clone(),
            email: principal.email.clone(),
            name: principal.name.clone(),
            role: principal.role,
            iat: now,
            exp: now + self.max_age,
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn sign(&self, claims: &SessionClaims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }

    pub fn issue(&self, principal: &Principal) -> Result<(String, SessionClaims), jsonwebtoken::errors::Error> {
        let claims = self.claims_for(principal);
        let token = self.sign(&claims)?;
        Ok((token, claims))
    }

    /// `None` for anything that is not a live token signed with our key.
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        match decode::<SessionClaims>(token, &self.decoding, &validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!("rejected session token: {e}");
                None
            }
        }
    }

    pub fn cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookies)
            .max_age(CookieDuration::seconds(self.max_age))
            .finish()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookies)
            .finish();
        cookie.make_removal();
        cookie
    }
}

pub fn expires_at(claims: &SessionClaims) -> String {
    DateTime::<Utc>::from_timestamp(claims.exp, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::user::Role;

    fn jane() -> Principal {
        Principal {
            id: "1".to_string(),
            email: "customer@example.com".to_string(),
            name: "Jane Customer".to_string(),
            role: Role::Customer,
        }
    }

    #[test]
    fn issued_token_carries_role() {
        let sessions = SessionService::new("secret", 60, false);
        let (token, _) = sessions.issue(&jane()).expect("sign");
        let claims = sessions.verify(&token).expect("valid token");
        assert_eq!(claims.role, Role::Customer);
        assert_eq!(claims.principal(), jane());
    }

    #[test]
    fn wrong_key_and_garbage_are_rejected() {
        let sessions = SessionService::new("secret", 60, false);
        let other = SessionService::new("other-secret", 60, false);
        let (token, _) = other.issue(&jane()).expect("sign");
        assert!(sessions.verify(&token).is_none());
        assert!(sessions.verify("not.a.token").is_none());
        assert!(sessions.verify("").is_none());
    }

    #[test]
    fn expired_token_is_rejected() {
        let sessions = SessionService::new("secret", 60, false);
        let mut claims = sessions.claims_for(&jane());
        claims.iat -= 3600;
        claims.exp = Utc::now().timestamp() - 10;
        let token = sessions.sign(&claims).expect("sign");
        assert!(sessions.verify(&token).is_none());
    }

    #[test]
    fn cookie_flags() {
        let sessions = SessionService::new("secret", 60, true);
        let cookie = sessions.cookie("tok".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(CookieDuration::seconds(60)));
        assert_eq!(sessions.removal_cookie().value(), "");
    }
}
