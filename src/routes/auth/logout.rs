use actix_web::{post, web, HttpRequest};
use std::sync::Arc;
use tracing::info;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RedirectRes;
use crate::utils::session::SessionService;
use crate::utils::webutils::current_session;

#[post("/logout")]
async fn logout(
    req: HttpRequest,
    sessions: web::Data<Arc<SessionService>>,
) -> ApiResult<RedirectRes> {
    if let Some(claims) = current_session(&req, &sessions) {
        info!("[auth] {} signed out", claims.email);
    }

    Ok(ApiResponse::WithCookie(
        RedirectRes { redirect: "/".to_string() },
        sessions.removal_cookie(),
    ))
}
