pub mod assignments;
pub mod auth;
pub mod class_students;
pub mod classes;
pub mod feedback;
pub mod languages;
pub mod profiles;
pub mod questions;
pub mod submissions;
pub mod users;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use class_students::ClassStudentService;
pub use classes::ClassService;
pub use feedback::FeedbackService;
pub use languages::LanguageService;
pub use profiles::ProfileService;
pub use questions::QuestionService;
pub use submissions::SubmissionService;
pub use users::UserService;

use actix_web::{HttpRequest, web};
use std::sync::Arc;

use crate::errors::AssignEaseError;
use crate::storage::Storage;

/// 从 app data 中取出存储实例
pub(crate) fn storage_from_app_data(
    request: &HttpRequest,
) -> Result<Arc<dyn Storage>, AssignEaseError> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| AssignEaseError::internal("Storage not found in app data"))
}

/// 通用 CRUD 资源的 404
pub(crate) fn not_found() -> AssignEaseError {
    AssignEaseError::not_found("Not found.")
}
