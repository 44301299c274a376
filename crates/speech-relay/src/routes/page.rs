use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use super::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[utoipa::path(
    get,
    path = "/",
    operation_id = "demo_page",
    responses(
        (
            status = 200,
            description = "Recorder and upload page",
            content_type = "text/html",
            body = String
        ),
    ),
    tag = "relay",
)]
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[utoipa::path(
    get,
    path = "/favicon.ico",
    operation_id = "favicon",
    responses(
        (status = 302, description = "Redirect to the hosted icon"),
    ),
    tag = "relay",
)]
pub async fn favicon(State(state): State<AppState>) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, state.config.favicon_url.clone())],
    )
        .into_response()
}
