use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::services::not_found;

pub async fn get_question(
    service: &QuestionService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_question_by_id(id).await? {
        Some(question) => Ok(HttpResponse::Ok().json(question)),
        None => Err(not_found().into()),
    }
}
