use super::entities::SubmissionStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;

// 提交详情，title 为作业标题，subject 为班级名称，questiontext 为题目内容
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub assignment: i64,
    pub student: i64,
    pub question: i64,
    pub questiontext: String,
    pub code: String,
    pub status: SubmissionStatus,
    pub feedback: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 学生成绩概况
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentPerformance {
    pub total_assignments: u64,
    pub submitted: u64,
    pub checked: u64,
    pub reassigned: u64,
    pub rejected: u64,
}
