use serde::Deserialize;

pub fn filter_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

#[derive(Default, Deserialize)]
pub struct Env {
    /// Raw service-account JSON key.
    #[serde(default, deserialize_with = "filter_empty")]
    pub google_service_account_credentials: Option<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub favicon_url: Option<String>,
    #[serde(default)]
    pub max_body_bytes: Option<usize>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub speech_api_base: Option<String>,
}

impl Env {
    pub fn log_credentials(&self) {
        if self.google_service_account_credentials.is_some() {
            tracing::info!("service_credentials_configured");
        } else {
            tracing::error!("no_service_credentials_configured");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_count_as_absent() {
        let env: Env = serde_json::from_value(serde_json::json!({
            "google_service_account_credentials": "   ",
            "favicon_url": "",
            "speech_api_base": "http://localhost:9000"
        }))
        .unwrap();

        assert!(env.google_service_account_credentials.is_none());
        assert!(env.favicon_url.is_none());
        assert_eq!(env.speech_api_base.as_deref(), Some("http://localhost:9000"));
        assert!(env.max_body_bytes.is_none());
    }
}
