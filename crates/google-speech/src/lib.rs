mod client;
mod error;
mod types;

pub use client::{DEFAULT_API_BASE, RecognizeFuture, Recognizer, SpeechClient};
pub use error::Error;
pub use types::{
    AudioEncoding, RecognitionAudio, RecognitionConfig, RecognizeRequest, RecognizeResponse,
    SpeechRecognitionAlternative, SpeechRecognitionResult,
};
