use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ProfileService, describe_profile};
use crate::middlewares::RequireJWT;

pub async fn list_own_profiles(
    service: &ProfileService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    let mut profiles = Vec::new();
    if let Some(profile) = storage.get_profile_by_user_id(current_user.id).await? {
        profiles.push(describe_profile(&storage, profile).await?);
    }

    Ok(HttpResponse::Ok().json(profiles))
}
