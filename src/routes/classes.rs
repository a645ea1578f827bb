use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::class_students::requests::{
    CreateClassStudentRequest, UpdateClassStudentRequest,
};
use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::services::{ClassService, ClassStudentService};
use crate::utils::{SafeClassIdI64, SafeIDI64};

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);
static CLASS_STUDENT_SERVICE: Lazy<ClassStudentService> =
    Lazy::new(ClassStudentService::new_lazy);

// HTTP处理程序
pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn get_class(req: HttpRequest, class_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, class_id.0).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeIDI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.0, update_data.into_inner())
        .await
}

pub async fn destroy_class(req: HttpRequest, class_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.destroy_class(&req, class_id.0).await
}

pub async fn delete_owned_class(
    req: HttpRequest,
    class_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_owned_class(&req, class_id.0).await
}

pub async fn get_class_simple(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class_simple(&req, class_id.0).await
}

pub async fn list_students_in_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .list_students_in_class(&req, class_id.0)
        .await
}

pub async fn list_class_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE.list_class_students(&req).await
}

pub async fn join_class(
    req: HttpRequest,
    join_data: web::Json<CreateClassStudentRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .join_class(&req, join_data.into_inner())
        .await
}

pub async fn get_class_student(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE.get_class_student(&req, id.0).await
}

pub async fn update_class_student(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateClassStudentRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .update_class_student(&req, id.0, update_data.into_inner())
        .await
}

pub async fn delete_class_student(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE.delete_class_student(&req, id.0).await
}

pub async fn list_students_in_class_unchecked(
    req: HttpRequest,
    class_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .list_students_in_class_unchecked(&req, class_id.0)
        .await
}

pub async fn list_joined_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE.list_joined_classes(&req).await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/classes")
            .wrap(middlewares::RequireJWT)
            .service(
                // 只列出当前用户作为教师的班级，创建不校验角色
                web::resource("/")
                    .route(web::get().to(list_classes))
                    .route(web::post().to(create_class)),
            )
            .service(
                web::resource("/{id}/")
                    .route(web::get().to(get_class))
                    .route(web::put().to(update_class))
                    .route(web::patch().to(update_class))
                    .route(web::delete().to(destroy_class)),
            )
            .service(
                // 非班级教师返回 403
                web::resource("/{id}/delete/").route(web::delete().to(delete_owned_class)),
            ),
    )
    .service(
        web::scope("/class")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/simple/{class_id}/").route(web::get().to(get_class_simple)),
            )
            .service(
                web::resource("/{class_id}/students/")
                    .route(web::get().to(list_students_in_class)),
            ),
    )
    .service(
        web::scope("/classstudents")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/")
                    .route(web::get().to(list_class_students))
                    .route(web::post().to(join_class)),
            )
            .service(
                web::resource("/{id}/")
                    .route(web::get().to(get_class_student))
                    .route(web::put().to(update_class_student))
                    .route(web::patch().to(update_class_student))
                    .route(web::delete().to(delete_class_student)),
            )
            .service(
                // 这里的 id 是班级 ID
                web::resource("/{id}/students/")
                    .route(web::get().to(list_students_in_class_unchecked)),
            ),
    )
    .service(
        web::resource("/joined-classes/")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(list_joined_classes)),
    );
}
