use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, visible_student_scope};
use crate::middlewares::RequireJWT;
use crate::services::not_found;

pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    let submission = match storage.get_submission_by_id(submission_id).await? {
        Some(submission)
            if visible_student_scope(&current_user)
                .is_none_or(|student_id| student_id == submission.student_id) =>
        {
            submission
        }
        _ => return Err(not_found().into()),
    };

    let response = storage
        .describe_submissions(vec![submission])
        .await?
        .pop()
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(response))
}
