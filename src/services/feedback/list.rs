use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;

pub async fn list_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    Ok(HttpResponse::Ok().json(storage.list_feedback().await?))
}
