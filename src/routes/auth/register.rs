use actix_web::{post, web};

use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RRegister, RedirectRes};

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_registration(data: &RRegister) -> Result<(), AppError> {
    if data.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if data.email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    if data.password != data.confirm_password {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }
    if data.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Demo sign-up: checks the form and sends the user to the login page.
/// Accounts live in the credential store, nothing is written here.
#[post("/register")]
async fn register(
    _req: actix_web::HttpRequest,
    data: web::Json<RRegister>,
) -> ApiResult<RedirectRes> {
    validate_registration(&data)?;

    Ok(ApiResponse::Ok(RedirectRes {
        redirect: "/auth/login".to_string(),
    }))
}
