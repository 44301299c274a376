mod error;
pub(crate) mod page;
pub(crate) mod transcribe;

pub(crate) use error::RouteError;
pub use transcribe::TranscriptionResponse;

use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
    routing::{any, get},
};

use crate::config::RelayConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: RelayConfig,
}

pub fn router(config: RelayConfig) -> Router {
    let max_body_bytes = config.max_body_bytes;
    let state = AppState { config };

    Router::new()
        .route("/favicon.ico", any(page::favicon))
        .route(
            "/",
            get(page::index)
                .head(method_not_allowed)
                .post(transcribe::handler)
                .fallback(method_not_allowed),
        )
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

async fn method_not_allowed() -> RouteError {
    RouteError::MethodNotAllowed
}

// Any path other than `/` and the icon: POST transcribes, everything else is refused.
async fn fallback(
    method: Method,
    state: State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method == Method::POST {
        transcribe::handler(state, headers, body)
            .await
            .into_response()
    } else {
        RouteError::MethodNotAllowed.into_response()
    }
}
