use actix_web::{get, post, web};
use serde_json::Value;
use std::sync::Arc;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::webhook::WebhookOp;
use crate::utils::webhook::WebhookClient;

async fn relay(webhook: &WebhookClient, op: WebhookOp, body: Option<Value>) -> ApiResult<Value> {
    let data = webhook.forward(op, body.as_ref()).await?;
    Ok(ApiResponse::Ok(data))
}

#[post("/book")]
async fn book(webhook: web::Data<Arc<WebhookClient>>, body: web::Json<Value>) -> ApiResult<Value> {
    relay(&webhook, WebhookOp::Book, Some(body.into_inner())).await
}

#[post("/cancel")]
async fn cancel(webhook: web::Data<Arc<WebhookClient>>, body: web::Json<Value>) -> ApiResult<Value> {
    relay(&webhook, WebhookOp::Cancel, Some(body.into_inner())).await
}

#[get("/events")]
async fn events(webhook: web::Data<Arc<WebhookClient>>) -> ApiResult<Value> {
    relay(&webhook, WebhookOp::Events, None).await
}

#[post("/chat")]
async fn chat(webhook: web::Data<Arc<WebhookClient>>, body: web::Json<Value>) -> ApiResult<Value> {
    relay(&webhook, WebhookOp::Chat, Some(body.into_inner())).await
}

#[post("/intake")]
async fn intake(webhook: web::Data<Arc<WebhookClient>>, body: web::Json<Value>) -> ApiResult<Value> {
    relay(&webhook, WebhookOp::Intake, Some(body.into_inner())).await
}

#[get("/appointments")]
async fn appointments(webhook: web::Data<Arc<WebhookClient>>) -> ApiResult<Value> {
    relay(&webhook, WebhookOp::Appointments, None).await
}

#[post("/send-reminder")]
async fn send_reminder(
    webhook: web::Data<Arc<WebhookClient>>,
    body: web::Json<Value>,
) -> ApiResult<Value> {
    relay(&webhook, WebhookOp::SendReminder, Some(body.into_inner())).await
}
