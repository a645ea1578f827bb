use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::QuestionService;
use crate::services::not_found;

pub async fn delete_question(
    service: &QuestionService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if !storage.delete_question(id).await? {
        return Err(not_found().into());
    }
    info!("Question {} deleted", id);

    Ok(HttpResponse::NoContent().finish())
}
