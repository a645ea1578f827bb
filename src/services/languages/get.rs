use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LanguageService;
use crate::services::not_found;

pub async fn get_language(
    service: &LanguageService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_language_by_id(id).await? {
        Some(language) => Ok(HttpResponse::Ok().json(language)),
        None => Err(not_found().into()),
    }
}
