use serde::Deserialize;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

#[derive(Deserialize)]
pub struct AppEnv {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default, deserialize_with = "speech_relay::filter_empty")]
    pub sentry_dsn: Option<String>,
}

// Read as two structs over the same variables: envy cannot parse numeric
// fields behind `#[serde(flatten)]`.
pub fn load() -> Result<(AppEnv, speech_relay::Env), envy::Error> {
    from_vars(std::env::vars())
}

pub fn from_vars(
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<(AppEnv, speech_relay::Env), envy::Error> {
    let vars: Vec<_> = vars.into_iter().collect();
    Ok((envy::from_iter(vars.clone())?, envy::from_iter(vars)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let env: AppEnv = serde_json::from_value(serde_json::json!({ "sentry_dsn": "" })).unwrap();

        assert_eq!(env.host, "0.0.0.0");
        assert_eq!(env.port, 8787);
        assert!(env.sentry_dsn.is_none());
    }

    #[test]
    fn both_structs_read_the_same_variables() {
        let vars = [
            ("PORT", "9000"),
            ("SENTRY_DSN", ""),
            ("GOOGLE_SERVICE_ACCOUNT_CREDENTIALS", "{}"),
            ("MAX_BODY_BYTES", "2048"),
            ("FAVICON_URL", "https://cdn.example.com/mic.png"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let (app, relay) = from_vars(vars).unwrap();

        assert_eq!(app.port, 9000);
        assert_eq!(app.host, "0.0.0.0");
        assert!(app.sentry_dsn.is_none());
        assert_eq!(relay.google_service_account_credentials.as_deref(), Some("{}"));
        assert_eq!(relay.max_body_bytes, Some(2048));
        assert_eq!(
            relay.favicon_url.as_deref(),
            Some("https://cdn.example.com/mic.png")
        );
        assert!(relay.speech_api_base.is_none());
    }
}
