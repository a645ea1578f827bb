pub mod delete;
pub mod get;
pub mod join;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::AssignEaseError;
use crate::models::class_students::requests::{
    CreateClassStudentRequest, UpdateClassStudentRequest,
};
use crate::storage::Storage;

pub(crate) const ALREADY_ENROLLED: &str = "This student is already assigned to this class.";

pub struct ClassStudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassStudentService {
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

    // 学生加入班级
    pub async fn join_class(
        &self,
        request: &HttpRequest,
        join_data: CreateClassStudentRequest,
    ) -> ActixResult<HttpResponse> {
        join::join_class(self, request, join_data).await
    }

    pub async fn list_class_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_class_students(self, request).await
    }

    // 班级不存在时返回 404
    pub async fn list_students_in_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_students_in_class(self, request, class_id).await
    }

    // 不检查班级是否存在
    pub async fn list_students_in_class_unchecked(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_students_in_class_unchecked(self, request, class_id).await
    }

    // 当前用户已加入的班级
    pub async fn list_joined_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_joined_classes(self, request).await
    }

    pub async fn get_class_student(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_class_student(self, request, id).await
    }

    pub async fn update_class_student(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdateClassStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class_student(self, request, id, update_data).await
    }

    pub async fn delete_class_student(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class_student(self, request, id).await
    }
}
