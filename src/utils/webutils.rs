use actix_web::{http::header::Header, HttpRequest};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};

use crate::types::session::SessionClaims;
use crate::utils::session::{SessionService, SESSION_COOKIE};

pub fn encode_all(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

pub fn decode_all(input: &str) -> Option<String> {
    urlencoding::decode(input).ok().map(|cow| cow.into_owned())
}

/// Path as the router sees it, with every percent-escape resolved, so
/// `/%63ustomer` and `/customer` are the same path.
pub fn routed_path(req: &HttpRequest) -> String {
    let path = req.match_info().as_str();
    decode_all(path).unwrap_or_else(|| path.to_string())
}

/// Raw session token: the session cookie wins, a bearer header is the fallback.
pub fn session_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    Authorization::<Bearer>::parse(req)
        .ok()
        .map(|auth| auth.as_ref().token().to_string())
}

pub fn current_session(req: &HttpRequest, sessions: &SessionService) -> Option<SessionClaims> {
    session_token(req).and_then(|token| sessions.verify(&token))
}
