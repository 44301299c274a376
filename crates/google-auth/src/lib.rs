mod error;
mod key;
mod provider;

pub use error::Error;
pub use key::{DEFAULT_TOKEN_URI, ServiceAccountKey};
pub use provider::{
    AccessToken, CLOUD_PLATFORM_SCOPE, ServiceAccountTokenProvider, StaticTokenProvider,
    TokenFuture, TokenProvider,
};
