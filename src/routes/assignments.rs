use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{
    CreateAssignmentRequest, CreateQuestionRequest, StudentContextQuery, UpdateAssignmentRequest,
    UpdateQuestionRequest,
};
use crate::models::languages::requests::{CreateLanguageRequest, UpdateLanguageRequest};
use crate::services::{AssignmentService, LanguageService, QuestionService};
use crate::utils::{SafeClassIdI64, SafeIDI64, SafeQuestionIdI64, SafeStudentIdI64};

// 懒加载的全局服务实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static QUESTION_SERVICE: Lazy<QuestionService> = Lazy::new(QuestionService::new_lazy);
static LANGUAGE_SERVICE: Lazy<LanguageService> = Lazy::new(LanguageService::new_lazy);

// 作业
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<StudentContextQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, data.into_inner())
        .await
}

pub async fn get_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
    query: web::Query<StudentContextQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .get_assignment(&req, assignment_id.0, query.into_inner())
        .await
}

pub async fn update_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
    data: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(&req, assignment_id.0, data.into_inner())
        .await
}

pub async fn delete_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .delete_assignment(&req, assignment_id.0)
        .await
}

pub async fn list_assignments_for_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<StudentContextQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments_for_class(&req, class_id.0, query.into_inner())
        .await
}

pub async fn list_assignments_for_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments_for_student(&req, student_id.0)
        .await
}

pub async fn get_assignment_by_question(
    req: HttpRequest,
    question_id: SafeQuestionIdI64,
    query: web::Query<StudentContextQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .get_assignment_by_question(&req, question_id.0, query.into_inner())
        .await
}

// 作业题目
pub async fn list_questions(req: HttpRequest) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.list_questions(&req).await
}

pub async fn create_question(
    req: HttpRequest,
    data: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .create_question(&req, data.into_inner())
        .await
}

pub async fn get_question(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.get_question(&req, id.0).await
}

pub async fn update_question(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .update_question(&req, id.0, data.into_inner())
        .await
}

pub async fn delete_question(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.delete_question(&req, id.0).await
}

// 编程语言
pub async fn list_languages(req: HttpRequest) -> ActixResult<HttpResponse> {
    LANGUAGE_SERVICE.list_languages(&req).await
}

pub async fn create_language(
    req: HttpRequest,
    data: web::Json<CreateLanguageRequest>,
) -> ActixResult<HttpResponse> {
    LANGUAGE_SERVICE
        .create_language(&req, data.into_inner())
        .await
}

pub async fn get_language(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    LANGUAGE_SERVICE.get_language(&req, id.0).await
}

pub async fn update_language(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateLanguageRequest>,
) -> ActixResult<HttpResponse> {
    LANGUAGE_SERVICE
        .update_language(&req, id.0, data.into_inner())
        .await
}

pub async fn delete_language(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    LANGUAGE_SERVICE.delete_language(&req, id.0).await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                // ?student_id= 作为 is_submitted 的学生上下文
                web::resource("/")
                    .route(web::get().to(list_assignments))
                    .route(web::post().to(create_assignment)),
            )
            .service(
                web::resource("/{id}/")
                    .route(web::get().to(get_assignment))
                    .route(web::put().to(update_assignment))
                    .route(web::patch().to(update_assignment))
                    .route(web::delete().to(delete_assignment)),
            ),
    )
    .service(
        web::scope("/assignmentquestions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/")
                    .route(web::get().to(list_questions))
                    .route(web::post().to(create_question)),
            )
            .service(
                web::resource("/{id}/")
                    .route(web::get().to(get_question))
                    .route(web::put().to(update_question))
                    .route(web::patch().to(update_question))
                    .route(web::delete().to(delete_question)),
            ),
    )
    .service(
        web::scope("/programminglanguages")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/")
                    .route(web::get().to(list_languages))
                    .route(web::post().to(create_language)),
            )
            .service(
                web::resource("/{id}/")
                    .route(web::get().to(get_language))
                    .route(web::put().to(update_language))
                    .route(web::patch().to(update_language))
                    .route(web::delete().to(delete_language)),
            ),
    )
    .service(
        web::resource("/assignment_details/{id}/")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(get_assignment)),
    )
    .service(
        // 班级没有作业时返回 404
        web::resource("/assignment-details/{class_id}/")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(list_assignments_for_class)),
    )
    .service(
        web::resource("/student_assignments/{student_id}/")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(list_assignments_for_student)),
    )
    .service(
        web::resource("/assignment-by-question/{question_id}/")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(get_assignment_by_question)),
    );
}
