use base64::Engine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    EncodingUnspecified,
    Linear16,
    Flac,
    Mulaw,
    Amr,
    AmrWb,
    OggOpus,
    SpeexWithHeaderByte,
    Mp3,
    WebmOpus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub encoding: AudioEncoding,
    pub sample_rate_hertz: u32,
    pub language_code: String,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            encoding: AudioEncoding::Mp3,
            sample_rate_hertz: 16000,
            language_code: "en-US".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionAudio {
    /// Base64-encoded audio bytes.
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

impl RecognizeRequest {
    pub fn from_audio(config: RecognitionConfig, audio: &[u8]) -> Self {
        Self {
            config,
            audio: RecognitionAudio {
                content: base64::engine::general_purpose::STANDARD.encode(audio),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
}

impl RecognizeResponse {
    /// `results[0].alternatives[0].transcript`, if the API produced one.
    pub fn first_transcript(&self) -> Option<&str> {
        self.results
            .first()?
            .alternatives
            .first()?
            .transcript
            .as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechRecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechRecognitionAlternative {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub confidence: Option<f32>,
}
