use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{from_fn, Logger},
    web, App,
};
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::user_store::{StaticUserStore, UserStore};
use crate::middleware::route_guard::route_guard;
use crate::routes::configure_routes;
use crate::types::error::AppError;
use crate::utils::session::SessionService;
use crate::utils::templates::PageRenderer;
use crate::utils::webhook::WebhookClient;

/// Everything the handlers share, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: EnvConfig,
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<SessionService>,
    pub webhook: Arc<WebhookClient>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(config: EnvConfig, users: Arc<dyn UserStore>) -> Result<Self, AppError> {
        let sessions = Arc::new(SessionService::from_config(&config));
        let webhook = Arc::new(WebhookClient::new(config.webhook_url.clone())?);
        let pages = Arc::new(PageRenderer::new()?);
        Ok(Self { config, users, sessions, webhook, pages })
    }

    /// State backed by the demo credential table.
    pub fn with_demo_users(config: EnvConfig) -> Result<Self, AppError> {
        Self::new(config, Arc::new(StaticUserStore::demo()))
    }
}

pub fn create_app(state: &AppState) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // Bodies are parsed as JSON whatever Content-Type the caller sent.
    let json_config = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    App::new()
        .app_data(json_config)
        .app_data(web::Data::new(state.config.clone()))
        .app_data(web::Data::new(Arc::clone(&state.users)))
        .app_data(web::Data::new(Arc::clone(&state.sessions)))
        .app_data(web::Data::new(Arc::clone(&state.webhook)))
        .app_data(web::Data::new(Arc::clone(&state.pages)))
        .wrap(from_fn(route_guard))
        .wrap(Logger::default())
        .configure(configure_routes)
}
