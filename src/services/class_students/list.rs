use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassStudentService;
use crate::middlewares::RequireJWT;
use crate::services::not_found;

pub async fn list_class_students(
    service: &ClassStudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let enrollments = storage.list_class_students(None).await?;

    Ok(HttpResponse::Ok().json(enrollments))
}

pub async fn list_students_in_class(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if storage.get_class_by_id(class_id).await?.is_none() {
        return Err(not_found().into());
    }

    let enrollments = storage.list_class_students(Some(class_id)).await?;

    Ok(HttpResponse::Ok().json(enrollments))
}

pub async fn list_students_in_class_unchecked(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let enrollments = storage.list_class_students(Some(class_id)).await?;

    Ok(HttpResponse::Ok().json(enrollments))
}

pub async fn list_joined_classes(
    service: &ClassStudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    let joined = storage.list_joined_classes(current_user.id).await?;
    tracing::debug!(
        "User {} has joined {} class(es)",
        current_user.id,
        joined.len()
    );

    Ok(HttpResponse::Ok().json(joined))
}
