pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::AssignEaseError;
use crate::models::assignments::{
    entities::Assignment,
    requests::{CreateAssignmentRequest, StudentContextQuery, UpdateAssignmentRequest},
    responses::AssignmentResponse,
};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        query: StudentContextQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, request, query).await
    }

    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        data: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, request, data).await
    }

    // 作业详情，包含题目列表
    pub async fn get_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        query: StudentContextQuery,
    ) -> ActixResult<HttpResponse> {
        detail::get_assignment(self, request, assignment_id, query).await
    }

    // 班级下的作业，没有作业时返回 404
    pub async fn list_assignments_for_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        query: StudentContextQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments_for_class(self, request, class_id, query).await
    }

    // 学生所在全部班级的作业，is_submitted 针对该学生
    pub async fn list_assignments_for_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments_for_student(self, request, student_id).await
    }

    // 通过提交引用的题目反查作业
    pub async fn get_assignment_by_question(
        &self,
        request: &HttpRequest,
        question_id: i64,
        query: StudentContextQuery,
    ) -> ActixResult<HttpResponse> {
        detail::get_assignment_by_question(self, request, question_id, query).await
    }

    pub async fn update_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        data: UpdateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assignment(self, request, assignment_id, data).await
    }

    pub async fn delete_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, request, assignment_id).await
    }
}

/// 单个作业的详情
pub(crate) async fn describe_assignment(
    storage: &Arc<dyn Storage>,
    assignment: Assignment,
    student_id: Option<i64>,
) -> Result<AssignmentResponse, AssignEaseError> {
    storage
        .describe_assignments(vec![assignment], student_id)
        .await?
        .pop()
        .ok_or_else(super::not_found)
}
