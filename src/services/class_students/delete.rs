use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassStudentService;
use crate::services::not_found;

pub async fn delete_class_student(
    service: &ClassStudentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if !storage.delete_class_student(id).await? {
        return Err(not_found().into());
    }
    info!("Enrollment {} deleted", id);

    Ok(HttpResponse::NoContent().finish())
}
