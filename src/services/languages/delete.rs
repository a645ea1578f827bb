use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::LanguageService;
use crate::services::not_found;

pub async fn delete_language(
    service: &LanguageService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 级联删除使用该语言的作业
    if !storage.delete_language(id).await? {
        return Err(not_found().into());
    }
    info!("Programming language {} deleted", id);

    Ok(HttpResponse::NoContent().finish())
}
