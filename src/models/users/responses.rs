use super::entities::{Profile, User};
use serde::Serialize;

// 对外暴露的用户字段
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

// 注册响应
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
}

// 资料响应，附带所属用户的用户名与邮箱
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub user: i64,
    pub name: Option<String>,
    pub enrollment_number: Option<String>,
    pub tid: Option<String>,
    pub username: String,
    pub email: String,
}

impl ProfileResponse {
    pub fn new(profile: Profile, user: User) -> Self {
        Self {
            id: profile.id,
            user: profile.user_id,
            name: profile.name,
            enrollment_number: profile.enrollment_number,
            tid: profile.tid,
            username: user.username,
            email: user.email,
        }
    }
}
