use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::submissions::requests::{
    CreateFeedbackRequest, CreateSubmissionRequest, UpdateFeedbackRequest,
};
use crate::services::{FeedbackService, SubmissionService};
use crate::utils::{SafeIDI64, SafeStudentIdI64, SafeSubmissionIdI64};

// 懒加载的全局 SUBMISSION_SERVICE 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);
static FEEDBACK_SERVICE: Lazy<FeedbackService> = Lazy::new(FeedbackService::new_lazy);

// HTTP处理程序
pub async fn list_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.list_submissions(&req).await
}

pub async fn create_submission(
    req: HttpRequest,
    data: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, data.into_inner())
        .await
}

pub async fn get_submission(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.get_submission(&req, id.0).await
}

pub async fn delete_submission(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.delete_submission(&req, id.0).await
}

pub async fn list_submissions_for_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions_for_student(&req, student_id.0)
        .await
}

pub async fn update_submission_status(
    req: HttpRequest,
    submission_id: SafeSubmissionIdI64,
    body: web::Bytes,
) -> ActixResult<HttpResponse> {
    // 请求体在确认提交存在后才解析
    SUBMISSION_SERVICE
        .update_submission_status(&req, submission_id.0, &body)
        .await
}

pub async fn student_performance(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .student_performance(&req, student_id.0)
        .await
}

pub async fn list_feedback(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.list_feedback(&req).await
}

pub async fn create_feedback(
    req: HttpRequest,
    data: web::Json<CreateFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .create_feedback(&req, data.into_inner())
        .await
}

pub async fn get_feedback(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.get_feedback(&req, id.0).await
}

pub async fn update_feedback(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .update_feedback(&req, id.0, data.into_inner())
        .await
}

pub async fn delete_feedback(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.delete_feedback(&req, id.0).await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/submissions")
            .wrap(middlewares::RequireJWT)
            .service(
                // 教师可见全部，其他用户只可见自己的提交
                web::resource("/")
                    .route(web::get().to(list_submissions))
                    .route(web::post().to(create_submission)),
            )
            .service(
                web::resource("/student/{student_id}/")
                    .route(web::get().to(list_submissions_for_student)),
            )
            .service(
                web::resource("/{id}/")
                    .route(web::get().to(get_submission))
                    .route(web::delete().to(delete_submission)),
            )
            .service(
                web::resource("/{submission_id}/update-status/")
                    .route(web::patch().to(update_submission_status)),
            ),
    )
    .service(
        web::scope("/teacherfeedback")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/")
                    .route(web::get().to(list_feedback))
                    .route(web::post().to(create_feedback)),
            )
            .service(
                web::resource("/{id}/")
                    .route(web::get().to(get_feedback))
                    .route(web::put().to(update_feedback))
                    .route(web::patch().to(update_feedback))
                    .route(web::delete().to(delete_feedback)),
            ),
    )
    .service(
        web::resource("/student-performance/{student_id}/")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(student_performance)),
    );
}
