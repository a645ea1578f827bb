use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ALREADY_ENROLLED, ClassStudentService};
use crate::errors::AssignEaseError;
use crate::models::class_students::requests::CreateClassStudentRequest;
use crate::services::not_found;

pub async fn join_class(
    service: &ClassStudentService,
    request: &HttpRequest,
    join_data: CreateClassStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 预检查，并发时由唯一索引兜底，同样返回 400
    if storage
        .get_class_student_by_pair(join_data.student, join_data.class_assigned)
        .await?
        .is_some()
    {
        return Err(AssignEaseError::validation(ALREADY_ENROLLED).into());
    }

    let enrollment = storage.create_class_student(join_data).await?;
    info!(
        "Student {} joined class {}",
        enrollment.student_id, enrollment.class_id
    );

    let detail = storage
        .get_class_student_detail(enrollment.id)
        .await?
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Created().json(detail))
}
