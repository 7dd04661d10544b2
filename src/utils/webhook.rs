use reqwest::{header::CONTENT_TYPE, Client, ClientBuilder};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

use crate::types::{error::AppError, webhook::WebhookOp};

/// Forwards portal calls to `{base}{suffix}` on the workflow webhook.
///
/// One attempt per call. The base URL stays optional here so a forward
/// without one fails with [`AppError::NotConfigured`] before any I/O.
pub struct WebhookClient {
    base_url: Option<String>,
    client: Client,
}

impl WebhookClient {
    pub fn new(base_url: Option<String>) -> Result<Self, AppError> {
        let client = ClientBuilder::new()
            .user_agent("serene-portal/0.1 (+reqwest)")
            .tcp_nodelay(true)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Internal(format!("build client failed: {e}")))?;

        Ok(Self {
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
            client,
        })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn url_for(&self, op: WebhookOp) -> Option<String> {
        self.base_url().map(|base| format!("{base}{}", op.suffix()))
    }

    /// Sends `body` (ignored for GET operations) and hands back the
    /// upstream JSON untouched. Upstream status and body never leave this
    /// function except through the logs.
    pub async fn forward(&self, op: WebhookOp, body: Option<&Value>) -> Result<Value, AppError> {
        let url = self.url_for(op).ok_or_else(|| {
            error!("[webhook] {op}: NEXT_PUBLIC_N8N_WEBHOOK_URL is not configured");
            AppError::NotConfigured
        })?;

        let mut req = self
            .client
            .request(op.method(), &url)
            .header(CONTENT_TYPE, "application/json");
        if op.method() != reqwest::Method::GET {
            req = req.json(body.unwrap_or(&Value::Object(Default::default())));
        }

        debug!("[webhook] -> {} {url}", op.method());
        let t0 = Instant::now();
        let res = req.send().await.map_err(|e| {
            error!("[webhook] {op}: send failed: {e}");
            AppError::Upstream(op)
        })?;

        let status = res.status();
        let text = res.text().await.map_err(|e| {
            error!("[webhook] {op}: read body failed: {e}");
            AppError::Upstream(op)
        })?;
        debug!("[webhook] <- {status} in {} ms", t0.elapsed().as_millis());

        if !status.is_success() {
            warn!("[webhook] {op}: upstream returned HTTP {status}: {text}");
            return Err(AppError::Upstream(op));
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!("[webhook] {op}: upstream body is not JSON ({e}): {text}");
            AppError::Upstream(op)
        })
    }
}
