use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::services::not_found;
use crate::utils::validate::validate_required_text;

pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    mut data: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    validate_required_text("code", &data.code, None)?;

    // 未指定学生时为当前用户
    data.student = data.student.or(Some(current_user.id));

    let storage = service.get_storage(request)?;

    // (student, assignment, question) 重复时由唯一索引返回 400
    let submission = storage.create_submission(data).await?;
    info!(
        "Submission {} created by student {} for question {}",
        submission.id, submission.student_id, submission.question_id
    );

    let response = storage
        .describe_submissions(vec![submission])
        .await?
        .pop()
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Created().json(response))
}
