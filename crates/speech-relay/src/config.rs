use std::sync::Arc;

use relay_google_auth::{ServiceAccountTokenProvider, TokenProvider};
use relay_google_speech::{RecognitionConfig, Recognizer, SpeechClient};

use crate::env::Env;

pub const DEFAULT_FAVICON_URL: &str =
    "https://www.gstatic.com/images/branding/product/1x/googleg_48dp.png";
// Inline audio ceiling of the synchronous recognize API.
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
pub const NO_TRANSCRIPTION: &str = "No transcription available";

#[derive(Clone)]
pub struct RelayConfig {
    pub credentials: Option<String>,
    pub favicon_url: String,
    pub recognition: RecognitionConfig,
    pub max_body_bytes: usize,
    pub token_provider: Arc<dyn TokenProvider>,
    pub recognizer: Arc<dyn Recognizer>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new(&Env::default())
    }
}

impl RelayConfig {
    pub fn new(env: &Env) -> Self {
        let client = reqwest::Client::new();

        let mut speech = SpeechClient::new(client.clone());
        if let Some(api_base) = &env.speech_api_base {
            speech = speech.with_api_base(api_base);
        }

        Self {
            credentials: env.google_service_account_credentials.clone(),
            favicon_url: env
                .favicon_url
                .clone()
                .unwrap_or_else(|| DEFAULT_FAVICON_URL.to_string()),
            recognition: RecognitionConfig::default(),
            max_body_bytes: env.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES),
            token_provider: Arc::new(ServiceAccountTokenProvider::new(client)),
            recognizer: Arc::new(speech),
        }
    }

    pub fn with_credentials(mut self, credentials: impl Into<String>) -> Self {
        self.credentials = Some(credentials.into());
        self
    }

    pub fn without_credentials(mut self) -> Self {
        self.credentials = None;
        self
    }

    pub fn with_favicon_url(mut self, url: impl Into<String>) -> Self {
        self.favicon_url = url.into();
        self
    }

    pub fn with_recognition(mut self, recognition: RecognitionConfig) -> Self {
        self.recognition = recognition;
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn with_token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = provider;
        self
    }

    pub fn with_recognizer(mut self, recognizer: Arc<dyn Recognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }
}
