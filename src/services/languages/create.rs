use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::LanguageService;
use crate::models::languages::requests::CreateLanguageRequest;
use crate::utils::validate::{LANGUAGE_NAME_MAX_LENGTH, validate_required_text};

pub async fn create_language(
    service: &LanguageService,
    request: &HttpRequest,
    data: CreateLanguageRequest,
) -> ActixResult<HttpResponse> {
    validate_required_text(
        "language_name",
        &data.language_name,
        Some(LANGUAGE_NAME_MAX_LENGTH),
    )?;

    let storage = service.get_storage(request)?;
    let language = storage.create_language(data).await?;
    info!("Programming language {} created", language.language_name);

    Ok(HttpResponse::Created().json(language))
}
