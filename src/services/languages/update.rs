use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LanguageService;
use crate::models::languages::requests::UpdateLanguageRequest;
use crate::services::not_found;
use crate::utils::validate::{LANGUAGE_NAME_MAX_LENGTH, validate_required_text};

pub async fn update_language(
    service: &LanguageService,
    request: &HttpRequest,
    id: i64,
    data: UpdateLanguageRequest,
) -> ActixResult<HttpResponse> {
    if let Some(language_name) = &data.language_name {
        validate_required_text(
            "language_name",
            language_name,
            Some(LANGUAGE_NAME_MAX_LENGTH),
        )?;
    }

    let storage = service.get_storage(request)?;

    match storage.update_language(id, data).await? {
        Some(language) => Ok(HttpResponse::Ok().json(language)),
        None => Err(not_found().into()),
    }
}
