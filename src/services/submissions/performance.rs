use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;

pub async fn student_performance(
    service: &SubmissionService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let performance = storage.get_student_performance(student_id).await?;

    Ok(HttpResponse::Ok().json(performance))
}
