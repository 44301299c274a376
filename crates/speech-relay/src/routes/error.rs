use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub(crate) enum RouteError {
    MethodNotAllowed,
    EmptyAudio,
    MissingCredentials,
    CredentialExchange(String),
    Fetch(String),
    Upstream { status: u16, body: String },
    InvalidUpstreamResponse(String),
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".into()),
            Self::EmptyAudio => (StatusCode::BAD_REQUEST, "No audio data provided".into()),
            Self::MissingCredentials => {
                tracing::error!("route_error_missing_credentials");
                sentry::capture_message("missing service credentials", sentry::Level::Error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Missing service credentials".into(),
                )
            }
            Self::CredentialExchange(m) => {
                tracing::error!(detail = %m, "route_error_credential_exchange");
                sentry::capture_message(&m, sentry::Level::Error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Credential exchange failed: {m}"),
                )
            }
            Self::Fetch(m) => {
                tracing::error!(detail = %m, "route_error_fetch");
                sentry::capture_message(&m, sentry::Level::Error);
                (StatusCode::SERVICE_UNAVAILABLE, format!("Fetch error: {m}"))
            }
            Self::Upstream { status, body } => {
                tracing::error!(upstream_status = status, body = %body, "route_error_upstream");
                sentry::with_scope(
                    |scope| scope.set_tag("upstream.status", status.to_string()),
                    || sentry::capture_message(&body, sentry::Level::Error),
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Speech API error: {body}"),
                )
            }
            Self::InvalidUpstreamResponse(m) => {
                tracing::error!(detail = %m, "route_error_invalid_upstream_response");
                sentry::capture_message(&m, sentry::Level::Error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Invalid response from speech API: {m}"),
                )
            }
        };
        (status, msg).into_response()
    }
}

impl From<relay_google_auth::Error> for RouteError {
    fn from(e: relay_google_auth::Error) -> Self {
        Self::CredentialExchange(e.to_string())
    }
}

impl From<relay_google_speech::Error> for RouteError {
    fn from(e: relay_google_speech::Error) -> Self {
        match e {
            relay_google_speech::Error::Request(e) => Self::Fetch(e.to_string()),
            relay_google_speech::Error::Api { status, body } => Self::Upstream { status, body },
            relay_google_speech::Error::Json(e) => Self::InvalidUpstreamResponse(e.to_string()),
        }
    }
}
