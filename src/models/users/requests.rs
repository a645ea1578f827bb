use super::entities::UserRole;
use serde::Deserialize;

// 注册请求
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub name: String,
    pub enrollment_number: Option<String>,
    pub tid: Option<String>,
}

// 用户创建请求，进入存储层前 password 已替换为哈希值
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// 用户更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// 注册时随用户一起创建的资料（存储层输入）
#[derive(Debug, Clone)]
pub struct CreateProfileRequest {
    pub role: UserRole,
    pub name: String,
    pub enrollment_number: Option<String>,
    pub tid: Option<String>,
}

// 资料更新请求，角色不可修改
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub enrollment_number: Option<String>,
    pub tid: Option<String>,
}
