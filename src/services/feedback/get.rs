use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::services::not_found;

pub async fn get_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_feedback_by_id(id).await? {
        Some(feedback) => Ok(HttpResponse::Ok().json(feedback)),
        None => Err(not_found().into()),
    }
}
