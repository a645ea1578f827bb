use serde::Deserialize;

// 创建班级请求
//
// teacher 可选，不填写则使用当前登录用户
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub class_name: String,
    pub teacher: Option<i64>,
}

// 更新班级请求
#[derive(Debug, Deserialize)]
pub struct UpdateClassRequest {
    pub class_name: Option<String>,
    pub teacher: Option<i64>,
}
