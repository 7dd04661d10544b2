use actix_web::{dev::ServerHandle, web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// What the fake webhook saw.
#[derive(Debug, Clone)]
pub struct Hit {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

type Hits = Arc<Mutex<Vec<Hit>>>;

/// Stand-in for the workflow webhook, listening on an ephemeral local port.
///
/// - `{root}/ok/<op>` echoes `{method, path, received}` with 200
/// - `{root}/failing/<op>` answers 503 with a detailed JSON error
/// - `{root}/garbage/<op>` answers 200 with a non-JSON body
pub struct FakeWebhook {
    pub root: String,
    hits: Hits,
    handle: ServerHandle,
}

#[allow(dead_code)]
impl FakeWebhook {
    pub async fn start() -> FakeWebhook {
        let hits: Hits = Arc::new(Mutex::new(Vec::new()));
        let data = web::Data::new(Arc::clone(&hits));

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(respond))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind fake webhook");

        let port = server.addrs()[0].port();
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        FakeWebhook {
            root: format!("http://127.0.0.1:{port}"),
            hits,
            handle,
        }
    }

    pub fn ok_base(&self) -> String {
        format!("{}/ok", self.root)
    }

    pub fn failing_base(&self) -> String {
        format!("{}/failing", self.root)
    }

    pub fn garbage_base(&self) -> String {
        format!("{}/garbage", self.root)
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().expect("hits lock").clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn respond(req: HttpRequest, body: web::Bytes, hits: web::Data<Hits>) -> HttpResponse {
    let path = req.path().to_string();
    let method = req.method().to_string();
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    hits.lock().expect("hits lock").push(Hit {
        method: method.clone(),
        path: path.clone(),
        content_type,
        body: body.to_vec(),
    });

    if path.starts_with("/failing") {
        return HttpResponse::ServiceUnavailable()
            .json(json!({ "error": "workflow exploded", "detail": "node 7 timed out" }));
    }
    if path.starts_with("/garbage") {
        return HttpResponse::Ok()
            .content_type("text/html")
            .body("<html>not json</html>");
    }

    let received: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    HttpResponse::Ok().json(json!({
        "method": method,
        "path": path,
        "received": received,
    }))
}
