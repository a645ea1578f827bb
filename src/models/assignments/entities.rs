use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub teacher_id: i64,
    pub language_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 作业题目
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentQuestion {
    pub id: i64,
    pub question_text: String,
    #[serde(rename = "assignment")]
    pub assignment_id: i64,
    pub created_at: DateTime<Utc>,
}
