use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AuthService;
use crate::errors::AssignEaseError;
use crate::models::users::{
    requests::{CreateProfileRequest, CreateUserRequest, RegisterRequest},
    responses::RegisterResponse,
};
use crate::utils::password::hash_password;
use crate::utils::validate::{
    IDENTIFIER_MAX_LENGTH, NAME_MAX_LENGTH, validate_credentials, validate_optional_text,
    validate_required_text,
};

pub async fn handle_register(
    service: &AuthService,
    request: &HttpRequest,
    register_request: RegisterRequest,
) -> ActixResult<HttpResponse> {
    validate_credentials(
        &register_request.username,
        &register_request.email,
        &register_request.password,
    )?;
    validate_required_text("name", &register_request.name, Some(NAME_MAX_LENGTH))?;
    validate_optional_text(
        "enrollment_number",
        register_request.enrollment_number.as_deref(),
        Some(IDENTIFIER_MAX_LENGTH),
    )?;
    validate_optional_text(
        "tid",
        register_request.tid.as_deref(),
        Some(IDENTIFIER_MAX_LENGTH),
    )?;

    let storage = service.get_storage(request)?;

    // 用户名、邮箱唯一
    if storage
        .get_user_by_username(&register_request.username)
        .await?
        .is_some()
    {
        return Err(
            AssignEaseError::validation("username: A user with that username already exists.")
                .into(),
        );
    }
    if storage
        .get_user_by_email(&register_request.email)
        .await?
        .is_some()
    {
        return Err(
            AssignEaseError::validation("email: A user with that email already exists.").into(),
        );
    }

    let password_hash = hash_password(&register_request.password)?;

    let user = storage
        .register_user(
            CreateUserRequest {
                username: register_request.username,
                email: register_request.email,
                password: password_hash,
            },
            CreateProfileRequest {
                role: register_request.role,
                name: register_request.name,
                enrollment_number: register_request.enrollment_number,
                tid: register_request.tid,
            },
        )
        .await?;

    info!(
        "User {} registered as {}",
        user.username, register_request.role
    );

    Ok(HttpResponse::Created().json(RegisterResponse { user: user.into() }))
}
