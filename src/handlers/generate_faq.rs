use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json,
    extract::{Multipart, State},
};

use crate::error::ApiError;
use crate::metrics::{RELAY_FAILURES_TOTAL, RELAY_LATENCY, REQUEST_TOTAL};
use crate::models::FaqResponse;
use crate::relay::{self, Upload};
use crate::state::AppState;

// POST /api/generate-faq - forward the uploaded spreadsheet to the AI
// service and hand back the generated questions
pub async fn generate_faq_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<FaqResponse>, ApiError> {
    REQUEST_TOTAL.inc();
    let start = Instant::now();

    let upload = read_file_field(&mut multipart).await?;
    tracing::info!(
        file = %upload.file_name,
        bytes = upload.data.len(),
        "forwarding upload to AI service"
    );

    let questions = relay::generate_faq(&state.client, &state.ai_url, upload)
        .await
        .inspect_err(|_| RELAY_FAILURES_TOTAL.inc())?;

    let elapsed = start.elapsed();
    RELAY_LATENCY.observe(elapsed.as_secs_f64());
    tracing::info!(
        elapsed_ms = elapsed.as_millis() as u64,
        questions = questions.len(),
        "faq generated"
    );

    Ok(Json(FaqResponse { questions }))
}

// Pull the "file" field out of the form; other fields are ignored
async fn read_file_field(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await?;

        return Ok(Upload {
            file_name,
            content_type,
            data,
        });
    }

    Err(ApiError::MissingFile)
}
