use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssignmentService, describe_assignment};
use crate::errors::AssignEaseError;
use crate::models::assignments::requests::StudentContextQuery;
use crate::services::not_found;

pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    query: StudentContextQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let assignment = storage
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(describe_assignment(&storage, assignment, query.student_id).await?))
}

pub async fn get_assignment_by_question(
    service: &AssignmentService,
    request: &HttpRequest,
    question_id: i64,
    query: StudentContextQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 多条提交引用同一题目时取 id 最小的一条
    let submission = storage
        .get_first_submission_by_question(question_id)
        .await?
        .ok_or_else(|| AssignEaseError::not_found("Submission with this question ID not found"))?;

    let assignment = storage
        .get_assignment_by_id(submission.assignment_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(describe_assignment(&storage, assignment, query.student_id).await?))
}
