use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::errors::AssignEaseError;
use crate::models::DetailResponse;
use crate::models::submissions::{
    entities::SubmissionStatus, requests::UpdateSubmissionStatusRequest,
};

pub async fn update_submission_status(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    body: &[u8],
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 先检查提交是否存在，再校验状态
    if storage.get_submission_by_id(submission_id).await?.is_none() {
        return Err(AssignEaseError::not_found("Submission not found").into());
    }

    // 缺失、格式错误或不在四种状态之内都视为无效状态
    let status = serde_json::from_slice::<UpdateSubmissionStatusRequest>(body)
        .ok()
        .and_then(|data| data.status)
        .and_then(|s| s.parse::<SubmissionStatus>().ok())
        .ok_or_else(|| AssignEaseError::validation("Invalid status"))?;

    storage
        .update_submission_status(submission_id, status)
        .await?
        .ok_or_else(|| AssignEaseError::not_found("Submission not found"))?;
    info!("Submission {} status set to {}", submission_id, status);

    Ok(HttpResponse::Ok().json(DetailResponse::new(
        "Submission status updated successfully",
    )))
}
