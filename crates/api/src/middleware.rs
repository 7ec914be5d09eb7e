use std::any::Any;
use std::time::Instant;

use axum::{Router, extract::Request, middleware::Next, response::IntoResponse, response::Response};
use tower::ServiceBuilder;

use crate::app::errors::ApiError;

/// Wrap `router` in the request pipeline: logging outermost, then panic recovery.
pub fn stack(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(log_requests))
            .layer(axum::middleware::from_fn(catch_panics)),
    )
}

/// Log method, path, status and latency of every request.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        %method,
        path = %path,
        status = res.status().as_u16(),
        latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "request handled"
    );
    res
}

/// Turn a panicking handler into a 500 response instead of a dropped connection.
pub async fn catch_panics(req: Request, next: Next) -> Response {
    match tokio::spawn(next.run(req)).await {
        Ok(res) => res,
        Err(e) if e.is_panic() => ApiError::Internal(panic_message(e.into_panic())).into_response(),
        Err(e) => ApiError::Internal(e.to_string()).into_response(),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(msg) => *msg,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(msg) => (*msg).to_string(),
            Err(_) => "internal error".to_string(),
        },
    }
}
