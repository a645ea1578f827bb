use serde::Serialize;

// 班级简要信息
#[derive(Debug, Serialize)]
pub struct ClassSimpleResponse {
    pub id: i64,
    pub class_name: String,
}
