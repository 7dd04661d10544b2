use actix_web::HttpServer;
use serene_portal::app::{create_app, AppState};
use serene_portal::config::EnvConfig;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match EnvConfig::from_env().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            error!("Refusing to start: {e}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };
    let addr = format!("0.0.0.0:{}", config.port);

    let state = AppState::with_demo_users(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    info!("Starting {} on {}", state.config.app_name, addr);

    HttpServer::new(move || create_app(&state))
        .bind(addr)?
        .run()
        .await
}
