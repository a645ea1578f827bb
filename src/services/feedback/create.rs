use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::CreateFeedbackRequest;
use crate::utils::validate::validate_required_text;

pub async fn create_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    mut data: CreateFeedbackRequest,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    validate_required_text("feedback", &data.feedback, None)?;

    // 未指定教师时为当前用户
    data.teacher = data.teacher.or(Some(current_user.id));

    let storage = service.get_storage(request)?;
    let feedback = storage.create_feedback(data).await?;
    info!(
        "Feedback {} left on submission {} by {}",
        feedback.id, feedback.submission_id, feedback.teacher_id
    );

    Ok(HttpResponse::Created().json(feedback))
}
