use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ClassService, find_owned_class};
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::UpdateClassRequest;
use crate::services::not_found;
use crate::utils::validate::{CLASS_NAME_MAX_LENGTH, validate_required_text};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    find_owned_class(&storage, class_id, current_user.id).await?;

    if let Some(class_name) = &update_data.class_name {
        validate_required_text("class_name", class_name, Some(CLASS_NAME_MAX_LENGTH))?;
    }

    let class = storage
        .update_class(class_id, update_data)
        .await?
        .ok_or_else(not_found)?;
    info!("Class {} updated by {}", class.id, current_user.id);

    Ok(HttpResponse::Ok().json(class))
}
