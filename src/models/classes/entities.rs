use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub class_name: String,
    // 教师ID
    #[serde(rename = "teacher")]
    pub teacher_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
