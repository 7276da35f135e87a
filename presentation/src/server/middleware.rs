//! Request tracing middleware

use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use std::time::Instant;
use tracing::{Instrument, info, info_span};

/// Wrap each request in a span and log its status and latency
pub async fn trace_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let span = info_span!(
        "http_request",
        method = %req.method(),
        path = %req.path()
    );
    let start = Instant::now();

    let res = next.call(req).instrument(span.clone()).await?;

    span.in_scope(|| {
        info!(
            status = res.status().as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );
    });
    Ok(res)
}
