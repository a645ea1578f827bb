pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::AssignEaseError;
use crate::models::assignments::requests::{CreateQuestionRequest, UpdateQuestionRequest};
use crate::storage::Storage;

pub struct QuestionService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuestionService {
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

    pub async fn list_questions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_questions(self, request).await
    }

    pub async fn create_question(
        &self,
        request: &HttpRequest,
        data: CreateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_question(self, request, data).await
    }

    pub async fn get_question(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_question(self, request, id).await
    }

    pub async fn update_question(
        &self,
        request: &HttpRequest,
        id: i64,
        data: UpdateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_question(self, request, id, data).await
    }

    pub async fn delete_question(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_question(self, request, id).await
    }
}
