use crate::rate_limit::RateLimiter;

// app's shared state
pub struct AppState {
    pub client: reqwest::Client,
    pub ai_url: String, // base URL of the AI service
    pub rate_limiter: RateLimiter,
}
