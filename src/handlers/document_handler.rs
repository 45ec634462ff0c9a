use actix_web::{http::header, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, models::dto::response::ExtractTextResponse,
    services::DocumentKind,
};

/// Accepts a raw document body and returns its best-effort extracted text.
/// Extraction itself never fails; only an unsupported `Content-Type` is
/// rejected.
#[post("/api/documents/extract")]
pub async fn extract_document(
    state: web::Data<AppState>,
    request: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let kind = DocumentKind::from_content_type(content_type)
        .ok_or_else(|| AppError::UnsupportedDocument(content_type.to_string()))?;

    let text = state.extraction_service.extract(&body, kind);
    log::info!(
        "extracted {} characters from {:?} upload of {} bytes",
        text.chars().count(),
        kind,
        body.len()
    );
    Ok(HttpResponse::Ok().json(ExtractTextResponse::new(text)))
}
