use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::page::index,
        crate::routes::page::favicon,
        crate::routes::transcribe::handler,
    ),
    components(schemas(crate::routes::TranscriptionResponse)),
    tags((name = "relay", description = "Audio to text relay for Google Cloud Speech-to-Text"))
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
