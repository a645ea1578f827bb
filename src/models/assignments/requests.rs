use chrono::NaiveDate;
use serde::Deserialize;

// 创建作业请求，teacher 缺省为当前用户
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub class_assigned: i64,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate, // YYYY-MM-DD
    pub language: i64,
    pub teacher: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub class_assigned: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub language: Option<i64>,
    pub teacher: Option<i64>,
}

// is_submitted 的学生上下文
#[derive(Debug, Default, Deserialize)]
pub struct StudentContextQuery {
    pub student_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub assignment: i64,
    pub question_text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuestionRequest {
    pub assignment: Option<i64>,
    pub question_text: Option<String>,
}
