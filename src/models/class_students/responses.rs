use serde::Serialize;

// 班级学生详情，名字与学号来自学生的 Profile
#[derive(Debug, Clone, Serialize)]
pub struct ClassStudentResponse {
    pub id: i64,
    pub student: i64,
    pub class_name: String,
    pub student_name: Option<String>,
    pub enrollment_number: Option<String>,
}

// 已加入的班级，class_assigned 为班级名称
#[derive(Debug, Clone, Serialize)]
pub struct JoinedClassResponse {
    pub id: i64,
    pub student: i64,
    pub class_assigned: String,
}
