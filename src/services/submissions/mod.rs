pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod performance;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::AssignEaseError;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::users::entities::CurrentUser;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    // 教师可见全部提交，其他用户只可见自己的
    pub async fn list_submissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request).await
    }

    pub async fn create_submission(
        &self,
        request: &HttpRequest,
        data: CreateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_submission(self, request, data).await
    }

    pub async fn get_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_submission(self, request, submission_id).await
    }

    pub async fn delete_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_submission(self, request, submission_id).await
    }

    // 学生的全部提交，没有提交时返回 404
    pub async fn list_submissions_for_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions_for_student(self, request, student_id).await
    }

    // 不检查角色与归属
    pub async fn update_submission_status(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        body: &[u8],
    ) -> ActixResult<HttpResponse> {
        status::update_submission_status(self, request, submission_id, body).await
    }

    pub async fn student_performance(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        performance::student_performance(self, request, student_id).await
    }
}

/// 当前用户可见的提交范围，None 表示全部
pub(crate) fn visible_student_scope(current_user: &CurrentUser) -> Option<i64> {
    if current_user.is_teacher() {
        None
    } else {
        Some(current_user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    fn user(role: Option<UserRole>) -> CurrentUser {
        CurrentUser {
            id: 5,
            username: "someone".into(),
            role,
        }
    }

    #[test]
    fn test_teacher_sees_everything() {
        assert_eq!(visible_student_scope(&user(Some(UserRole::Teacher))), None);
    }

    #[test]
    fn test_student_and_profileless_user_see_own() {
        assert_eq!(visible_student_scope(&user(Some(UserRole::Student))), Some(5));
        assert_eq!(visible_student_scope(&user(None)), Some(5));
    }
}
