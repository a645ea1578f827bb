use serde::Serialize;

// 学生选课记录
#[derive(Debug, Clone, Serialize)]
pub struct ClassStudent {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
}
