use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::errors::AssignEaseError;
use crate::models::users::{requests::CreateUserRequest, responses::UserResponse};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_credentials;

pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    mut user_data: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    validate_credentials(&user_data.username, &user_data.email, &user_data.password)?;

    let storage = service.get_storage(request)?;

    if storage
        .get_user_by_username(&user_data.username)
        .await?
        .is_some()
    {
        return Err(
            AssignEaseError::validation("username: A user with that username already exists.")
                .into(),
        );
    }
    if storage.get_user_by_email(&user_data.email).await?.is_some() {
        return Err(
            AssignEaseError::validation("email: A user with that email already exists.").into(),
        );
    }

    user_data.password = hash_password(&user_data.password)?;

    let user = storage.create_user(user_data).await?;
    info!("User {} created successfully", user.username);

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}
