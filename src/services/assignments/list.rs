use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::errors::AssignEaseError;
use crate::models::assignments::requests::StudentContextQuery;

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    query: StudentContextQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let assignments = storage.list_assignments().await?;
    let described = storage
        .describe_assignments(assignments, query.student_id)
        .await?;

    Ok(HttpResponse::Ok().json(described))
}

pub async fn list_assignments_for_class(
    service: &AssignmentService,
    request: &HttpRequest,
    class_id: i64,
    query: StudentContextQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let assignments = storage.list_assignments_by_class(class_id).await?;
    // 空结果视为错误
    if assignments.is_empty() {
        return Err(AssignEaseError::not_found("No assignments found for this class ID.").into());
    }

    let described = storage
        .describe_assignments(assignments, query.student_id)
        .await?;

    Ok(HttpResponse::Ok().json(described))
}

pub async fn list_assignments_for_student(
    service: &AssignmentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let assignments = storage.list_assignments_for_student(student_id).await?;
    let described = storage
        .describe_assignments(assignments, Some(student_id))
        .await?;

    Ok(HttpResponse::Ok().json(described))
}
