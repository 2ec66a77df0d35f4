use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::metrics::RATE_LIMITED_TOTAL;
use crate::models::RateLimitMessage;
use crate::state::AppState;

const RATE_LIMIT_MESSAGE: &str = "Too many requests, please try later or contact support.";

// Pick the key requests are counted under: forwarded header first (the
// gateway normally sits behind a proxy), then the peer address, then a
// shared sentinel. Unidentified clients all land in the "unknown"
// bucket and share one quota.
pub fn client_key(req: &Request) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').map(str::trim).find(|ip| !ip.is_empty()))
        .map(str::to_string)
        .or_else(|| {
            req.headers()
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.trim().to_string())
        })
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ci| ci.0.ip().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

// Gate applied to every /api route
pub async fn rate_limit(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let key = client_key(&req);
    let count = state.rate_limiter.hit(&key);
    tracing::debug!(client = %key, count, "counted request");

    if !state.rate_limiter.allows(count) {
        RATE_LIMITED_TOTAL.inc();
        tracing::warn!(
            client = %key,
            count,
            limit = state.rate_limiter.max_requests(),
            "rate limit exceeded"
        );
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(RateLimitMessage {
                message: RATE_LIMIT_MESSAGE.to_string(),
            }),
        )
            .into_response();
    }

    next.run(req).await
}
