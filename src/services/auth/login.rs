use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::AuthService;
use crate::errors::AssignEaseError;
use crate::models::auth::{requests::LoginRequest, responses::LoginResponse};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

const INVALID_CREDENTIALS: &str = "No active account found with the given credentials";

pub async fn handle_login(
    service: &AuthService,
    request: &HttpRequest,
    login_request: LoginRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 1. 根据用户名获取用户
    let Some(user) = storage
        .get_user_by_username(&login_request.username)
        .await?
    else {
        return Err(AssignEaseError::authentication(INVALID_CREDENTIALS).into());
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &user.password_hash) {
        return Err(AssignEaseError::authentication(INVALID_CREDENTIALS).into());
    }

    // 3. 角色来自 Profile，没有 Profile 时为 null
    let role = storage
        .get_profile_by_user_id(user.id)
        .await?
        .map(|profile| profile.role);

    // 4. 更新最后登录时间
    if let Err(e) = storage.update_last_login(user.id).await {
        warn!("Failed to update last login for {}: {}", user.username, e);
    }

    // 5. 生成令牌对
    let token_pair = JwtUtils::generate_token_pair(user.id, role).map_err(|e| {
        error!("Failed to generate JWT token: {}", e);
        AssignEaseError::internal("Login failed, unable to generate token")
    })?;

    info!("User {} logged in successfully", user.username);

    Ok(HttpResponse::Ok().json(LoginResponse {
        refresh: token_pair.refresh_token,
        access: token_pair.access_token,
        role,
    }))
}
