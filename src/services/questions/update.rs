use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::assignments::requests::UpdateQuestionRequest;
use crate::services::not_found;
use crate::utils::validate::validate_required_text;

pub async fn update_question(
    service: &QuestionService,
    request: &HttpRequest,
    id: i64,
    data: UpdateQuestionRequest,
) -> ActixResult<HttpResponse> {
    if let Some(question_text) = &data.question_text {
        validate_required_text("question_text", question_text, None)?;
    }

    let storage = service.get_storage(request)?;

    match storage.update_question(id, data).await? {
        Some(question) => Ok(HttpResponse::Ok().json(question)),
        None => Err(not_found().into()),
    }
}
