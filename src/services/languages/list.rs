use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LanguageService;

pub async fn list_languages(
    service: &LanguageService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    Ok(HttpResponse::Ok().json(storage.list_languages().await?))
}
