//! Role gate for the customer and employee page trees.

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header::LOCATION,
    middleware::Next,
    web, Error, HttpMessage, HttpResponse,
};
use std::sync::Arc;
use tracing::debug;

use crate::types::session::SessionClaims;
use crate::types::user::Role;
use crate::utils::session::SessionService;
use crate::utils::webutils::{current_session, encode_all, routed_path};

pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Role a path demands, if any.
pub fn required_role(path: &str) -> Option<Role> {
    if path.starts_with("/customer") {
        Some(Role::Customer)
    } else if path.starts_with("/employee") {
        Some(Role::Employee)
    } else {
        None
    }
}

pub fn decide(path: &str, session: Option<&SessionClaims>) -> GuardDecision {
    let Some(role) = required_role(path) else {
        return GuardDecision::Allow;
    };

    match session {
        Some(claims) if claims.role == role => GuardDecision::Allow,
        Some(_) => GuardDecision::Redirect(LOGIN_PATH.to_string()),
        None => GuardDecision::Redirect(format!("{LOGIN_PATH}?callbackUrl={}", encode_all(path))),
    }
}

pub async fn route_guard<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let session = req
        .app_data::<web::Data<Arc<SessionService>>>()
        .and_then(|sessions| current_session(req.request(), sessions));

    let path = routed_path(req.request());

    match decide(&path, session.as_ref()) {
        GuardDecision::Allow => {
            if let Some(claims) = session {
                req.extensions_mut().insert(claims);
            }
            next.call(req).await.map(ServiceResponse::map_into_left_body)
        }
        GuardDecision::Redirect(location) => {
            debug!("[guard] {path} -> {location}");
            let res = HttpResponse::TemporaryRedirect()
                .insert_header((LOCATION, location))
                .finish();
            Ok(req.into_response(res).map_into_right_body())
        }
    }
}
