use std::time::Instant;

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::person::CONTACTS_PATH;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started_at.elapsed().as_millis();

    info!(
        method = %method,
        path = %path,
        status = status.as_u16(),
        duration_ms = elapsed_ms,
        "request summary"
    );

    if is_missing_contact(&path, status) {
        warn!(method = %method, path = %path, "contact not found");
    }

    response
}

/// Only 404s under `/contacts` name a person that is absent; other unmatched
/// routes stay at the summary level.
fn is_missing_contact(path: &str, status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND && path.starts_with(CONTACTS_PATH)
}
