use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::services::not_found;

pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if !storage.delete_assignment(assignment_id).await? {
        return Err(not_found().into());
    }
    info!("Assignment {} deleted", assignment_id);

    Ok(HttpResponse::NoContent().finish())
}
