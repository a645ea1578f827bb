use super::entities::SubmissionStatus;
use serde::Deserialize;

// 创建提交请求，student 缺省为当前用户
#[derive(Debug, Deserialize)]
pub struct CreateSubmissionRequest {
    pub assignment: i64,
    pub question: i64,
    pub code: String,
    pub status: SubmissionStatus,
    pub student: Option<i64>,
    pub feedback: Option<String>,
}

// 状态更新请求，状态在服务层校验
#[derive(Debug, Deserialize)]
pub struct UpdateSubmissionStatusRequest {
    pub status: Option<String>,
}

// 创建教师反馈请求，teacher 缺省为当前用户
#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub submission: i64,
    pub feedback: String,
    #[serde(default)]
    pub resubmission_requested: bool,
    pub teacher: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFeedbackRequest {
    pub submission: Option<i64>,
    pub feedback: Option<String>,
    pub resubmission_requested: Option<bool>,
    pub teacher: Option<i64>,
}
