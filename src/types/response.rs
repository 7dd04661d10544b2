use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{cookie::Cookie, HttpResponse, Responder};

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    /// JSON body plus a cookie to set (or a removal cookie to clear one).
    WithCookie(T, Cookie<'static>),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::WithCookie(v, cookie) => HttpResponse::Ok()
                .cookie(cookie)
                .json(v),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
