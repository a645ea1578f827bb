pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::AssignEaseError;
use crate::models::submissions::requests::{CreateFeedbackRequest, UpdateFeedbackRequest};
use crate::storage::Storage;

pub struct FeedbackService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeedbackService {
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

    pub async fn list_feedback(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_feedback(self, request).await
    }

    pub async fn create_feedback(
        &self,
        request: &HttpRequest,
        data: CreateFeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_feedback(self, request, data).await
    }

    pub async fn get_feedback(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_feedback(self, request, id).await
    }

    pub async fn update_feedback(
        &self,
        request: &HttpRequest,
        id: i64,
        data: UpdateFeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_feedback(self, request, id, data).await
    }

    pub async fn delete_feedback(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_feedback(self, request, id).await
    }
}
