//! Request handlers

use super::error::ApiError;
use super::state::AppState;
use actix_web::{HttpRequest, HttpResponse, Responder, error::JsonPayloadError, web};
use portfolio_domain::ContactSubmission;
use serde_json::{Value, json};
use tracing::debug;

/// JSON extractor settings: malformed bodies get the standard error payload
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        debug!("Rejected request body: {}", err);
        ApiError::InvalidBody(err.to_string()).into()
    })
}

/// `POST /api/chat`: forward to the chat backend, answer with its body unchanged
pub async fn chat(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let reply = state.relay_chat.execute(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reply))
}

/// `POST /api/contact`: validate and email the submission
pub async fn contact(
    state: web::Data<AppState>,
    body: web::Json<ContactSubmission>,
) -> Result<HttpResponse, ApiError> {
    state.relay_contact.execute(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

/// `GET /api/portfolio`
pub async fn portfolio(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.showcase)
}

/// `GET /health`
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}
