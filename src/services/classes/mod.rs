pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::AssignEaseError;
use crate::models::classes::{
    entities::Class,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    // 获取当前教师的班级列表
    pub async fn list_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_classes(self, request).await
    }

    pub async fn create_class(
        &self,
        request: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, request, class_data).await
    }

    // 获取自己的班级
    pub async fn get_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_class(self, request, class_id).await
    }

    // 任意班级的简要信息
    pub async fn get_class_simple(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_class_simple(self, request, class_id).await
    }

    pub async fn update_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        update_data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, request, class_id, update_data).await
    }

    // 通用删除，非自己的班级返回 404
    pub async fn destroy_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::destroy_class(self, request, class_id).await
    }

    // 删除自己的班级，非班级教师返回 403
    pub async fn delete_owned_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_owned_class(self, request, class_id).await
    }
}

/// 当前教师名下的班级，其他班级视为不存在
pub(crate) async fn find_owned_class(
    storage: &Arc<dyn Storage>,
    class_id: i64,
    teacher_id: i64,
) -> Result<Class, AssignEaseError> {
    match storage.get_class_by_id(class_id).await? {
        Some(class) if class.teacher_id == teacher_id => Ok(class),
        _ => Err(super::not_found()),
    }
}
