use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;

pub async fn list_questions(
    service: &QuestionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    Ok(HttpResponse::Ok().json(storage.list_questions().await?))
}
