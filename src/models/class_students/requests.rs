use serde::Deserialize;

// 学生加入班级请求
#[derive(Debug, Deserialize)]
pub struct CreateClassStudentRequest {
    pub student: i64,
    pub class_assigned: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClassStudentRequest {
    pub student: Option<i64>,
    pub class_assigned: Option<i64>,
}
