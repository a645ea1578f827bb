use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::models::submissions::requests::UpdateFeedbackRequest;
use crate::services::not_found;
use crate::utils::validate::validate_required_text;

pub async fn update_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    id: i64,
    data: UpdateFeedbackRequest,
) -> ActixResult<HttpResponse> {
    if let Some(feedback) = &data.feedback {
        validate_required_text("feedback", feedback, None)?;
    }

    let storage = service.get_storage(request)?;

    match storage.update_feedback(id, data).await? {
        Some(feedback) => Ok(HttpResponse::Ok().json(feedback)),
        None => Err(not_found().into()),
    }
}
