use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{SubmissionService, visible_student_scope};
use crate::middlewares::RequireJWT;
use crate::services::not_found;

pub async fn delete_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    // 与列表相同的可见范围
    match storage.get_submission_by_id(submission_id).await? {
        Some(submission)
            if visible_student_scope(&current_user)
                .is_none_or(|student_id| student_id == submission.student_id) => {}
        _ => return Err(not_found().into()),
    }

    if !storage.delete_submission(submission_id).await? {
        return Err(not_found().into());
    }
    info!("Submission {} deleted by {}", submission_id, current_user.id);

    Ok(HttpResponse::NoContent().finish())
}
