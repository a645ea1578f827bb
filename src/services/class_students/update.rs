use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ALREADY_ENROLLED, ClassStudentService};
use crate::errors::AssignEaseError;
use crate::models::class_students::requests::UpdateClassStudentRequest;
use crate::services::not_found;

pub async fn update_class_student(
    service: &ClassStudentService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateClassStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let existing = storage
        .get_class_student_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    // 修改后的 (student, class) 仍需唯一
    let student_id = update_data.student.unwrap_or(existing.student_id);
    let class_id = update_data.class_assigned.unwrap_or(existing.class_id);
    if let Some(other) = storage.get_class_student_by_pair(student_id, class_id).await?
        && other.id != id
    {
        return Err(AssignEaseError::validation(ALREADY_ENROLLED).into());
    }

    storage
        .update_class_student(id, update_data)
        .await?
        .ok_or_else(not_found)?;
    info!("Enrollment {} updated", id);

    let detail = storage
        .get_class_student_detail(id)
        .await?
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(detail))
}
