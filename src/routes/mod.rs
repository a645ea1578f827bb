pub mod assignments;

pub mod auth;

pub mod classes;

pub mod submissions;

pub mod users;

pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use submissions::configure_submissions_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes) // 注册与登录，无需认证
        .configure(configure_user_routes) // 用户与资料
        .configure(configure_classes_routes) // 班级与选课
        .configure(configure_assignments_routes) // 作业、题目与编程语言
        .configure(configure_submissions_routes); // 提交、反馈与成绩统计
}
