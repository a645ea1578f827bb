use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassService, find_owned_class};
use crate::errors::AssignEaseError;
use crate::middlewares::RequireJWT;
use crate::models::classes::responses::ClassSimpleResponse;

pub async fn get_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    let class = find_owned_class(&storage, class_id, current_user.id).await?;

    Ok(HttpResponse::Ok().json(class))
}

pub async fn get_class_simple(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_class_by_id(class_id).await? {
        Some(class) => Ok(HttpResponse::Ok().json(ClassSimpleResponse {
            id: class.id,
            class_name: class.class_name,
        })),
        None => Err(AssignEaseError::not_found("Class not found.").into()),
    }
}
