use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{AssignmentService, describe_assignment};
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::utils::validate::{TITLE_MAX_LENGTH, validate_required_text};

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    mut data: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;

    validate_required_text("title", &data.title, Some(TITLE_MAX_LENGTH))?;
    validate_required_text("description", &data.description, None)?;

    // 未指定教师时为当前用户
    data.teacher = data.teacher.or(Some(current_user.id));

    let storage = service.get_storage(request)?;
    let assignment = storage.create_assignment(data).await?;
    info!(
        "Assignment {} created in class {} by {}",
        assignment.title, assignment.class_id, current_user.id
    );

    Ok(HttpResponse::Created().json(describe_assignment(&storage, assignment, None).await?))
}
