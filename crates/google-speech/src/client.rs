use std::future::Future;
use std::pin::Pin;

use crate::error::Error;
use crate::types::{RecognizeRequest, RecognizeResponse};

pub const DEFAULT_API_BASE: &str = "https://speech.googleapis.com";

pub type RecognizeFuture<'a> =
    Pin<Box<dyn Future<Output = Result<RecognizeResponse, Error>> + Send + 'a>>;

/// Turns an encoded audio request into recognition results.
pub trait Recognizer: Send + Sync {
    fn recognize<'a>(
        &'a self,
        access_token: &'a str,
        request: RecognizeRequest,
    ) -> RecognizeFuture<'a>;
}

#[derive(Clone)]
pub struct SpeechClient {
    http: reqwest::Client,
    api_base: String,
}

impl Default for SpeechClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl SpeechClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn recognize_url(&self) -> String {
        format!("{}/v1/speech:recognize", self.api_base)
    }

    pub async fn recognize_sync(
        &self,
        access_token: &str,
        request: &RecognizeRequest,
    ) -> Result<RecognizeResponse, Error> {
        let resp = self
            .http
            .post(self.recognize_url())
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        let response: RecognizeResponse = serde_json::from_str(&text)?;

        tracing::debug!(result_count = response.results.len(), "speech_recognize_ok");
        Ok(response)
    }
}

impl Recognizer for SpeechClient {
    fn recognize<'a>(
        &'a self,
        access_token: &'a str,
        request: RecognizeRequest,
    ) -> RecognizeFuture<'a> {
        Box::pin(async move { self.recognize_sync(access_token, &request).await })
    }
}
