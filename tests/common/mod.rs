use actix_web::{
    body::MessageBody,
    cookie::Cookie,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header::LOCATION,
    App,
};
use serene_portal::{
    app::{create_app, AppState},
    config::{EnvConfig, DEFAULT_APP_NAME},
    types::user::{Principal, Role},
    utils::session::SESSION_COOKIE,
};

pub mod upstream;

pub const TEST_SECRET: &str = "test_session_secret";

pub fn get_test_config(webhook_url: Option<String>) -> EnvConfig {
    EnvConfig {
        port: 8080,
        webhook_url,
        auth_url: "http://localhost:8080".to_string(),
        auth_secret: TEST_SECRET.to_string(),
        app_name: DEFAULT_APP_NAME.to_string(),
        session_max_age: 3600,
    }
}

pub struct TestContext {
    pub state: AppState,
}

impl TestContext {
    pub fn new(webhook_url: Option<String>) -> TestContext {
        let state = AppState::with_demo_users(get_test_config(webhook_url))
            .expect("Failed to build app state");
        TestContext { state }
    }

    pub fn create_app(&self) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        create_app(&self.state)
    }

    /// Signed session token for an arbitrary principal, bypassing login.
    #[allow(dead_code)]
    pub fn session_token(&self, role: Role) -> String {
        let principal = match role {
            Role::Customer => Principal {
                id: "1".to_string(),
                email: "customer@example.com".to_string(),
                name: "Jane Customer".to_string(),
                role,
            },
            Role::Employee => Principal {
                id: "2".to_string(),
                email: "employee@example.com".to_string(),
                name: "John Employee".to_string(),
                role,
            },
        };
        let (token, _) = self.state.sessions.issue(&principal).expect("Failed to sign session");
        token
    }
}

#[allow(dead_code)]
pub fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, token.to_string())
}

#[allow(dead_code)]
pub fn cookie_from<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

#[allow(dead_code)]
pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
