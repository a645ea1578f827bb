use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::QuestionService;
use crate::models::assignments::requests::CreateQuestionRequest;
use crate::utils::validate::validate_required_text;

pub async fn create_question(
    service: &QuestionService,
    request: &HttpRequest,
    data: CreateQuestionRequest,
) -> ActixResult<HttpResponse> {
    validate_required_text("question_text", &data.question_text, None)?;

    let storage = service.get_storage(request)?;
    let question = storage.create_question(data).await?;
    info!(
        "Question {} added to assignment {}",
        question.id, question.assignment_id
    );

    Ok(HttpResponse::Created().json(question))
}
