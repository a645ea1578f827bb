use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{AssignmentService, describe_assignment};
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::services::not_found;
use crate::utils::validate::{TITLE_MAX_LENGTH, validate_required_text};

pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    data: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    if let Some(title) = &data.title {
        validate_required_text("title", title, Some(TITLE_MAX_LENGTH))?;
    }
    if let Some(description) = &data.description {
        validate_required_text("description", description, None)?;
    }

    let storage = service.get_storage(request)?;

    let assignment = storage
        .update_assignment(assignment_id, data)
        .await?
        .ok_or_else(not_found)?;
    info!("Assignment {} updated", assignment.id);

    Ok(HttpResponse::Ok().json(describe_assignment(&storage, assignment, None).await?))
}
