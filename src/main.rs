use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faqsmith_gateway::config::Args;
use faqsmith_gateway::create_router;
use faqsmith_gateway::rate_limit::RateLimiter;
use faqsmith_gateway::state::AppState;

#[tokio::main]
async fn main() {
    // parse cli arguments
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.ai_timeout))
        .build()
        .expect("failed to build http client");

    // creating shared state
    let state = Arc::new(AppState {
        client,
        ai_url: args.ai_url.trim_end_matches('/').to_string(),
        rate_limiter: RateLimiter::new(
            args.rate_capacity,
            args.rate_limit,
            Duration::from_secs(args.rate_window),
        ),
    });

    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, ai_url = %args.ai_url, "gateway listening");
    tracing::info!(
        limit = args.rate_limit,
        window_secs = args.rate_window,
        clients = args.rate_capacity,
        "rate limit configured"
    );

    // serve with connect info so the gate can fall back to the peer
    // address when no forwarding headers are present
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server error");
}
