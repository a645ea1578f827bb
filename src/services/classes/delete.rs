use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{ClassService, find_owned_class};
use crate::errors::AssignEaseError;
use crate::middlewares::RequireJWT;
use crate::models::MessageResponse;
use crate::services::not_found;

pub async fn destroy_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    find_owned_class(&storage, class_id, current_user.id).await?;

    if !storage.delete_class(class_id).await? {
        return Err(not_found().into());
    }
    info!("Class {} deleted by {}", class_id, current_user.id);

    Ok(HttpResponse::NoContent().finish())
}

pub async fn delete_owned_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    let class = storage
        .get_class_by_id(class_id)
        .await?
        .ok_or_else(not_found)?;

    if class.teacher_id != current_user.id {
        warn!(
            "User {} tried to delete class {} owned by {}",
            current_user.id, class.id, class.teacher_id
        );
        return Err(
            AssignEaseError::authorization("You are not authorized to delete this class.").into(),
        );
    }

    storage.delete_class(class_id).await?;
    info!("Class {} deleted by {}", class_id, current_user.id);

    Ok(HttpResponse::Ok().json(MessageResponse::new("Class deleted successfully.")))
}
