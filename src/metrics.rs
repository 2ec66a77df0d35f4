use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter = register_counter!(
        "faqsmith_requests_total",
        "Total number of FAQ generation requests"
    )
    .unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter = register_counter!(
        "faqsmith_rate_limited_total",
        "Requests rejected by the rate limiter"
    )
    .unwrap();
    pub static ref RELAY_FAILURES_TOTAL: Counter = register_counter!(
        "faqsmith_relay_failures_total",
        "Uploads that failed to make it through the AI service"
    )
    .unwrap();
    pub static ref RELAY_LATENCY: Histogram = register_histogram!(
        "faqsmith_relay_latency_seconds",
        "End-to-end latency of forwarded uploads in seconds"
    )
    .unwrap();
}
