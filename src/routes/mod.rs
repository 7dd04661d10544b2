use actix_web::web;

pub mod auth;
pub mod health;
pub mod pages;
pub mod proxy;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .service(auth::login::login)
                    .service(auth::logout::logout)
                    .service(auth::session::session)
                    .service(auth::register::register)
            )
            .service(proxy::book)
            .service(proxy::cancel)
            .service(proxy::events)
            .service(proxy::chat)
            .service(proxy::intake)
            .service(proxy::appointments)
            .service(proxy::send_reminder)
    );
    cfg.service(pages::home)
        .service(pages::login_page)
        .service(pages::register_page)
        .service(pages::customer_page)
        .service(pages::employee_page);
}
