use std::future::Future;
use std::pin::Pin;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::key::ServiceAccountKey;

pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;

pub type TokenFuture<'a> = Pin<Box<dyn Future<Output = Result<String, Error>> + Send + 'a>>;

/// Exchanges service-account credentials for a short-lived bearer token.
pub trait TokenProvider: Send + Sync {
    fn access_token<'a>(&'a self, key: &'a ServiceAccountKey, scope: &'a str) -> TokenFuture<'a>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

/// Signs an RS256 JWT assertion with the service-account key and trades it
/// at the key's `token_uri`. Nothing is cached between calls.
#[derive(Clone)]
pub struct ServiceAccountTokenProvider {
    client: reqwest::Client,
}

impl Default for ServiceAccountTokenProvider {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl ServiceAccountTokenProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn sign_assertion(&self, key: &ServiceAccountKey, scope: &str) -> Result<String, Error> {
        let iat = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            iss: &key.client_email,
            scope,
            aud: &key.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = key.private_key_id.clone();

        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
        Ok(jsonwebtoken::encode(&header, &claims, &encoding_key)?)
    }

    pub async fn exchange(
        &self,
        key: &ServiceAccountKey,
        scope: &str,
    ) -> Result<AccessToken, Error> {
        let assertion = self.sign_assertion(key, scope)?;

        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", JWT_BEARER_GRANT_TYPE)
            .append_pair("assertion", &assertion)
            .finish();

        let response = self
            .client
            .post(&key.token_uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = %status,
                client_email = %key.client_email,
                "token_exchange_rejected"
            );
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let token: AccessToken = response.json().await?;
        tracing::debug!(expires_in = ?token.expires_in, "token_exchange_succeeded");
        Ok(token)
    }
}

impl TokenProvider for ServiceAccountTokenProvider {
    fn access_token<'a>(&'a self, key: &'a ServiceAccountKey, scope: &'a str) -> TokenFuture<'a> {
        Box::pin(async move { Ok(self.exchange(key, scope).await?.access_token) })
    }
}

/// Hands out a fixed token. Handy when the speech API is stubbed.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn access_token<'a>(
        &'a self,
        _key: &'a ServiceAccountKey,
        _scope: &'a str,
    ) -> TokenFuture<'a> {
        let token = self.token.clone();
        Box::pin(async move { Ok(token) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_with_pem(pem: &str) -> ServiceAccountKey {
        ServiceAccountKey::from_json(
            &serde_json::json!({
                "client_email": "svc@example.iam.gserviceaccount.com",
                "private_key": pem,
            })
            .to_string(),
        )
        .unwrap()
    }

    #[test]
    fn sign_assertion_rejects_garbage_pem() {
        let provider = ServiceAccountTokenProvider::default();
        let err = provider
            .sign_assertion(&key_with_pem("not a pem"), CLOUD_PLATFORM_SCOPE)
            .unwrap_err();
        assert!(matches!(err, Error::Signing(_)));
    }

    #[tokio::test]
    async fn static_provider_returns_fixed_token() {
        let provider = StaticTokenProvider::new("fixed");
        let key = key_with_pem("unused");
        let token = provider
            .access_token(&key, CLOUD_PLATFORM_SCOPE)
            .await
            .unwrap();
        assert_eq!(token, "fixed");
    }
}
