use serde::{Deserialize, Serialize};

// Response handed back to the uploader
#[derive(Debug, Serialize, Deserialize)]
pub struct FaqResponse {
    pub questions: Vec<String>,
}

// AI service response format
#[derive(Debug, Deserialize)]
pub struct UpstreamFaqResponse {
    pub summaries: Vec<String>,
}

// Body sent with 429 rejections
#[derive(Debug, Serialize, Deserialize)]
pub struct RateLimitMessage {
    pub message: String,
}

// Body sent with 4xx/5xx errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
