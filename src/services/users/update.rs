use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::errors::AssignEaseError;
use crate::models::users::{requests::UpdateUserRequest, responses::UserResponse};
use crate::services::not_found;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password, validate_username};

pub async fn update_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    mut update_data: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if storage.get_user_by_id(user_id).await?.is_none() {
        return Err(not_found().into());
    }

    if let Some(username) = &update_data.username {
        validate_username(username).map_err(AssignEaseError::validation)?;
        if let Some(other) = storage.get_user_by_username(username).await?
            && other.id != user_id
        {
            return Err(AssignEaseError::validation(
                "username: A user with that username already exists.",
            )
            .into());
        }
    }

    if let Some(email) = &update_data.email {
        validate_email(email).map_err(AssignEaseError::validation)?;
        if let Some(other) = storage.get_user_by_email(email).await?
            && other.id != user_id
        {
            return Err(
                AssignEaseError::validation("email: A user with that email already exists.")
                    .into(),
            );
        }
    }

    // 密码只写，写入前哈希
    if let Some(password) = update_data.password.take() {
        validate_password(&password).map_err(AssignEaseError::validation)?;
        update_data.password = Some(hash_password(&password)?);
    }

    match storage.update_user(user_id, update_data).await? {
        Some(user) => {
            info!("User {} updated successfully", user.username);
            Ok(HttpResponse::Ok().json(UserResponse::from(user)))
        }
        None => Err(not_found().into()),
    }
}
