use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::services::not_found;

pub async fn delete_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if storage.delete_user(user_id).await? {
        info!("User {} deleted", user_id);
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(not_found().into())
    }
}
