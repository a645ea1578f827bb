use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ProfileService, describe_profile};
use crate::middlewares::RequireJWT;
use crate::models::users::requests::UpdateProfileRequest;
use crate::services::not_found;
use crate::utils::validate::{
    IDENTIFIER_MAX_LENGTH, NAME_MAX_LENGTH, validate_optional_text, validate_required_text,
};

pub async fn update_own_profile(
    service: &ProfileService,
    request: &HttpRequest,
    profile_id: i64,
    update_data: UpdateProfileRequest,
) -> ActixResult<HttpResponse> {
    let current_user = RequireJWT::require_current_user(request)?;
    let storage = service.get_storage(request)?;

    match storage.get_profile_by_id(profile_id).await? {
        Some(profile) if profile.user_id == current_user.id => {}
        _ => return Err(not_found().into()),
    }

    if let Some(name) = &update_data.name {
        validate_required_text("name", name, Some(NAME_MAX_LENGTH))?;
    }
    validate_optional_text(
        "enrollment_number",
        update_data.enrollment_number.as_deref(),
        Some(IDENTIFIER_MAX_LENGTH),
    )?;
    validate_optional_text(
        "tid",
        update_data.tid.as_deref(),
        Some(IDENTIFIER_MAX_LENGTH),
    )?;

    let profile = storage
        .update_profile(profile_id, update_data)
        .await?
        .ok_or_else(not_found)?;
    info!("Profile {} updated by user {}", profile.id, current_user.id);

    Ok(HttpResponse::Ok().json(describe_profile(&storage, profile).await?))
}
