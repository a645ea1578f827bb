use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ProfileService, describe_profile};
use crate::errors::AssignEaseError;
use crate::middlewares::RequireJWT;
use crate::services::not_found;

pub async fn get_own_profile(
    service: &ProfileService,
    request: &HttpRequest,
    profile_id: i64,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    // 他人的资料视为不存在
    match storage.get_profile_by_id(profile_id).await? {
        Some(profile) if profile.user_id == current_user.id => {
            Ok(HttpResponse::Ok().json(describe_profile(&storage, profile).await?))
        }
        _ => Err(not_found().into()),
    }
}

pub async fn get_profile_by_user(
    service: &ProfileService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let profile = storage
        .get_profile_by_user_id(user_id)
        .await?
        .ok_or_else(|| AssignEaseError::not_found("Student not found"))?;

    Ok(HttpResponse::Ok().json(describe_profile(&storage, profile).await?))
}
