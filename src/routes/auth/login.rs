use actix_web::{post, web};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::db::user_store::{authenticate, UserStore};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin};
use crate::utils::session::{expires_at, SessionService};

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    users: web::Data<Arc<dyn UserStore>>,
    sessions: web::Data<Arc<SessionService>>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    let Some(principal) = authenticate(users.get_ref().as_ref(), &body.email, &body.password).await else {
        warn!("[auth] failed login for {:?}", body.email);
        return Err(AppError::InvalidCredentials);
    };

    let (token, claims) = sessions.issue(&principal).map_err(|e| {
        error!("[auth] signing session failed: {e}");
        AppError::Internal(e.to_string())
    })?;

    info!("[auth] {} signed in as {}", principal.email, principal.role);

    let redirect = principal.role.dashboard().to_string();
    Ok(ApiResponse::WithCookie(
        LoginRes {
            expires: expires_at(&claims),
            user: principal,
            redirect,
        },
        sessions.cookie(token),
    ))
}
