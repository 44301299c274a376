mod config;
mod env;
mod openapi;
mod routes;

pub use config::*;
pub use env::{Env, filter_empty};
pub use openapi::openapi;
pub use routes::{TranscriptionResponse, router};
