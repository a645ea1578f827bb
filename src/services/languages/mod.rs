pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::AssignEaseError;
use crate::models::languages::requests::{CreateLanguageRequest, UpdateLanguageRequest};
use crate::storage::Storage;

pub struct LanguageService {
    storage: Option<Arc<dyn Storage>>,
}

impl LanguageService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(
        &self,
        request: &HttpRequest,
    ) -> Result<Arc<dyn Storage>, AssignEaseError> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_app_data(request),
        }
    }

    pub async fn list_languages(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_languages(self, request).await
    }

    pub async fn create_language(
        &self,
        request: &HttpRequest,
        data: CreateLanguageRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_language(self, request, data).await
    }

    pub async fn get_language(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_language(self, request, id).await
    }

    pub async fn update_language(
        &self,
        request: &HttpRequest,
        id: i64,
        data: UpdateLanguageRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_language(self, request, id, data).await
    }

    pub async fn delete_language(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_language(self, request, id).await
    }
}
