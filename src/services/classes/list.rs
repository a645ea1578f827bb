use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::middlewares::RequireJWT;

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    let classes = storage.list_classes_by_teacher(current_user.id).await?;

    Ok(HttpResponse::Ok().json(classes))
}
