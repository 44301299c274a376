use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use relay_google_auth::{CLOUD_PLATFORM_SCOPE, ServiceAccountKey};
use relay_google_speech::RecognizeRequest;
use serde::{Deserialize, Serialize};

use super::{AppState, RouteError};
use crate::config::NO_TRANSCRIPTION;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TranscriptionResponse {
    pub text: String,
}

#[utoipa::path(
    post,
    path = "/",
    operation_id = "transcribe",
    request_body(
        content = Vec<u8>,
        content_type = "application/octet-stream",
        description = "Raw audio bytes. Any path accepts POST."
    ),
    responses(
        (status = 200, description = "First transcript alternative", body = TranscriptionResponse),
        (status = 400, description = "No audio data provided"),
        (status = 413, description = "Audio exceeds the body limit"),
        (status = 500, description = "Missing or unusable credentials, or speech API error"),
        (status = 503, description = "Speech API unreachable"),
    ),
    tag = "relay",
)]
pub async fn handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, RouteError> {
    if body.is_empty() {
        return Err(RouteError::EmptyAudio);
    }

    let credentials = state
        .config
        .credentials
        .as_deref()
        .ok_or(RouteError::MissingCredentials)?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info!(
        content_type = %content_type,
        body_size_bytes = %body.len(),
        "transcription_request"
    );

    let key = ServiceAccountKey::from_json(credentials)?;
    let token = state
        .config
        .token_provider
        .access_token(&key, CLOUD_PLATFORM_SCOPE)
        .await?;

    let request = RecognizeRequest::from_audio(state.config.recognition.clone(), &body);
    let response = state.config.recognizer.recognize(&token, request).await?;

    let text = match response.first_transcript() {
        Some(transcript) => transcript.to_string(),
        None => {
            tracing::info!(result_count = response.results.len(), "no_transcription");
            NO_TRANSCRIPTION.to_string()
        }
    };

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(TranscriptionResponse { text }),
    )
        .into_response())
}
