use axum::body::Bytes;
use reqwest::multipart::{Form, Part};

use crate::models::UpstreamFaqResponse;

// A single uploaded spreadsheet, passed through untouched
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

// Forward the upload to the AI service as multipart form data and pull
// the generated summaries out of its JSON response. Exactly one
// outbound call, no retries; the client's timeout bounds the wait.
pub async fn generate_faq(
    client: &reqwest::Client,
    ai_url: &str,
    upload: Upload,
) -> Result<Vec<String>, reqwest::Error> {
    let part = Part::bytes(upload.data.to_vec())
        .file_name(upload.file_name)
        .mime_str(&upload.content_type)?;
    let form = Form::new().part("file", part);

    let response = client
        .post(format!("{}/generate_faq", ai_url))
        .multipart(form)
        .send()
        .await?
        .error_for_status()?;

    let body: UpstreamFaqResponse = response.json().await?;
    Ok(body.summaries)
}
