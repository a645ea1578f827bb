use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassStudentService;
use crate::services::not_found;

pub async fn get_class_student(
    service: &ClassStudentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_class_student_detail(id).await? {
        Some(detail) => Ok(HttpResponse::Ok().json(detail)),
        None => Err(not_found().into()),
    }
}
