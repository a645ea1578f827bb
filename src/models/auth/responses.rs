use crate::models::users::entities::UserRole;
use serde::Serialize;

// 登录响应
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub refresh: String,
    pub access: String,
    pub role: Option<UserRole>,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access: String,
}
