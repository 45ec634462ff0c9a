use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateQuizRequest, RecordAnswerRequest},
    models::dto::response::SessionView,
};

#[get("/api/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[post("/api/quiz/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let count = request.resolved_count(state.config.default_question_count);
    if count > state.config.max_question_count {
        return Err(AppError::ValidationError(format!(
            "question count {} exceeds the maximum of {}",
            count, state.config.max_question_count
        )));
    }

    let session = state.session_service.generate(&request.text, count).await;
    Ok(HttpResponse::Created().json(SessionView::from(&session)))
}

#[get("/api/quiz")]
pub async fn get_quiz(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = state.session_service.current().await;
    Ok(HttpResponse::Ok().json(SessionView::from(&session)))
}

#[post("/api/quiz/answers")]
pub async fn record_answer(
    state: web::Data<AppState>,
    request: web::Json<RecordAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session = state
        .session_service
        .record_answer(request.question_index, &request.option)
        .await?;
    Ok(HttpResponse::Ok().json(SessionView::from(&session)))
}

#[post("/api/quiz/submit")]
pub async fn submit_quiz(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let report = state.session_service.submit().await?;
    Ok(HttpResponse::Ok().json(report))
}
