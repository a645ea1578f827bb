use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::CreateClassRequest;
use crate::utils::validate::{CLASS_NAME_MAX_LENGTH, validate_required_text};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    mut class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    validate_required_text(
        "class_name",
        &class_data.class_name,
        Some(CLASS_NAME_MAX_LENGTH),
    )?;

    // 未指定教师时归属当前用户，不校验角色
    class_data.teacher = class_data.teacher.or(Some(current_user.id));

    let class = storage.create_class(class_data).await?;
    info!(
        "Class {} created successfully by {}",
        class.class_name, current_user.id
    );

    Ok(HttpResponse::Created().json(class))
}
