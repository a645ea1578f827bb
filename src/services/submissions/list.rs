use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, visible_student_scope};
use crate::errors::AssignEaseError;
use crate::middlewares::RequireJWT;

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    let submissions = storage
        .list_submissions(visible_student_scope(&current_user))
        .await?;

    Ok(HttpResponse::Ok().json(storage.describe_submissions(submissions).await?))
}

pub async fn list_submissions_for_student(
    service: &SubmissionService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let submissions = storage.list_submissions(Some(student_id)).await?;
    // 空结果视为错误
    if submissions.is_empty() {
        return Err(AssignEaseError::not_found("No submissions found for this student.").into());
    }

    Ok(HttpResponse::Ok().json(storage.describe_submissions(submissions).await?))
}
