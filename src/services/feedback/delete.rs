use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeedbackService;
use crate::services::not_found;

pub async fn delete_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if !storage.delete_feedback(id).await? {
        return Err(not_found().into());
    }
    info!("Feedback {} deleted", id);

    Ok(HttpResponse::NoContent().finish())
}
