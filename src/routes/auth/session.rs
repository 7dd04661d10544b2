use actix_web::{get, web, HttpRequest};
use std::sync::Arc;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionRes;
use crate::utils::session::{expires_at, SessionService};
use crate::utils::webutils::current_session;

#[get("/session")]
async fn session(
    req: HttpRequest,
    sessions: web::Data<Arc<SessionService>>,
) -> ApiResult<SessionRes> {
    let res = match current_session(&req, &sessions) {
        Some(claims) => SessionRes {
            expires: Some(expires_at(&claims)),
            user: Some(claims.principal()),
        },
        None => SessionRes::default(),
    };

    Ok(ApiResponse::Ok(res))
}
