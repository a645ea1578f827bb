use super::entities::AssignmentQuestion;
use chrono::NaiveDate;
use serde::Serialize;

// 作业详情，包含题目列表与冗余的班级名、语言名
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub class_name: String,
    pub questions: Vec<AssignmentQuestion>,
    pub class_assigned: i64,
    pub teacher: i64,
    pub language: i64,
    pub language_name: String,
    pub is_submitted: bool,
}
