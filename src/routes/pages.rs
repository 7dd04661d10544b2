//! Server-rendered page shells. Forms talk to the `/api` routes; the markup
//! here only names the page and links the role's sections.

use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::types::error::AppError;
use crate::types::session::SessionClaims;
use crate::types::user::Role;
use crate::utils::templates::{Field, Form, Link, PageRenderer, PageView};

pub struct Page {
    pub slug: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const CUSTOMER_PAGES: &[Page] = &[
    Page { slug: "dashboard", title: "Dashboard", blurb: "Your upcoming appointments and quick actions." },
    Page { slug: "book", title: "Book Appointment", blurb: "Choose a service, date and time." },
    Page { slug: "chat", title: "AI Assistant", blurb: "Ask about treatments, prices and availability." },
    Page { slug: "intake", title: "Intake Form", blurb: "Medical history and treatment preferences." },
];

pub const EMPLOYEE_PAGES: &[Page] = &[
    Page { slug: "dashboard", title: "Dashboard", blurb: "Today's overview." },
    Page { slug: "schedule", title: "Schedule", blurb: "Appointments and reminders." },
    Page { slug: "events", title: "Events", blurb: "Recent activity from the booking workflow." },
    Page { slug: "settings", title: "Settings", blurb: "Notification and business preferences." },
];

static LOGIN_FORM: Form = Form {
    endpoint: "/api/auth/login",
    fields: &[
        Field { name: "email", kind: "email" },
        Field { name: "password", kind: "password" },
    ],
    submit: "Sign in",
};

static REGISTER_FORM: Form = Form {
    endpoint: "/api/auth/register",
    fields: &[
        Field { name: "name", kind: "text" },
        Field { name: "email", kind: "email" },
        Field { name: "password", kind: "password" },
        Field { name: "confirmPassword", kind: "password" },
    ],
    submit: "Create Account",
};

pub fn pages_for(role: Role) -> &'static [Page] {
    match role {
        Role::Customer => CUSTOMER_PAGES,
        Role::Employee => EMPLOYEE_PAGES,
    }
}

pub fn nav_links(role: Role) -> Vec<Link> {
    pages_for(role)
        .iter()
        .map(|p| Link { href: format!("/{role}/{}", p.slug), title: p.title })
        .collect()
}

fn view<'a>(
    config: &'a EnvConfig,
    title: &'a str,
    blurb: &'a str,
    session: Option<&SessionClaims>,
) -> PageView<'a> {
    PageView {
        app_name: &config.app_name,
        title,
        blurb,
        user: session.map(SessionClaims::principal),
        links: session.map(|c| nav_links(c.role)).unwrap_or_default(),
        greet: false,
        form: None,
    }
}

fn html(markup: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(markup)
}

#[get("/")]
async fn home(
    config: web::Data<EnvConfig>,
    renderer: web::Data<Arc<PageRenderer>>,
    session: Option<web::ReqData<SessionClaims>>,
) -> Result<HttpResponse, AppError> {
    let page = view(
        &config,
        "Welcome",
        "Relax, book and manage your treatments in one place.",
        session.as_deref(),
    );
    Ok(html(renderer.render(&page)?))
}

#[get("/auth/login")]
async fn login_page(
    config: web::Data<EnvConfig>,
    renderer: web::Data<Arc<PageRenderer>>,
) -> Result<HttpResponse, AppError> {
    let page = PageView { form: Some(&LOGIN_FORM), ..view(&config, "Welcome Back", "", None) };
    Ok(html(renderer.render(&page)?))
}

#[get("/auth/register")]
async fn register_page(
    config: web::Data<EnvConfig>,
    renderer: web::Data<Arc<PageRenderer>>,
) -> Result<HttpResponse, AppError> {
    let page = PageView {
        form: Some(&REGISTER_FORM),
        ..view(&config, "Create Account", "Join us for your wellness journey", None)
    };
    Ok(html(renderer.render(&page)?))
}

/// `/customer/{page}` and `/employee/{page}`. The guard has already matched
/// the session role to the prefix, so the claims are always present here.
pub async fn role_page(
    config: web::Data<EnvConfig>,
    renderer: web::Data<Arc<PageRenderer>>,
    session: Option<web::ReqData<SessionClaims>>,
    path: web::Path<String>,
    role: Role,
) -> Result<HttpResponse, AppError> {
    let slug = path.into_inner();
    let Some(page) = pages_for(role).iter().find(|p| p.slug == slug) else {
        return Ok(HttpResponse::NotFound().finish());
    };

    let shell = PageView { greet: true, ..view(&config, page.title, page.blurb, session.as_deref()) };
    Ok(html(renderer.render(&shell)?))
}

#[get("/customer/{page}")]
async fn customer_page(
    config: web::Data<EnvConfig>,
    renderer: web::Data<Arc<PageRenderer>>,
    session: Option<web::ReqData<SessionClaims>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    role_page(config, renderer, session, path, Role::Customer).await
}

#[get("/employee/{page}")]
async fn employee_page(
    config: web::Data<EnvConfig>,
    renderer: web::Data<Arc<PageRenderer>>,
    session: Option<web::ReqData<SessionClaims>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    role_page(config, renderer, session, path, Role::Employee).await
}
