use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::requests::{CreateUserRequest, UpdateProfileRequest, UpdateUserRequest};
use crate::services::{ProfileService, UserService};
use crate::utils::SafeIDI64;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);
static PROFILE_SERVICE: Lazy<ProfileService> = Lazy::new(ProfileService::new_lazy);

// HTTP处理程序
pub async fn list_users(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&req).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(&req, user_data.into_inner()).await
}

pub async fn get_user(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(&req, user_id.0).await
}

pub async fn update_user(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(&req, user_id.0, update_data.into_inner())
        .await
}

pub async fn delete_user(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(&req, user_id.0).await
}

pub async fn list_profiles(req: HttpRequest) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.list_profiles(&req).await
}

pub async fn get_profile(req: HttpRequest, profile_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.get_profile(&req, profile_id.0).await
}

pub async fn update_profile(
    req: HttpRequest,
    profile_id: SafeIDI64,
    update_data: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE
        .update_profile(&req, profile_id.0, update_data.into_inner())
        .await
}

pub async fn get_student(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.get_student(&req, user_id.0).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/")
                    .route(web::get().to(list_users))
                    .route(web::post().to(create_user)),
            )
            .service(
                web::resource("/{id}/")
                    .route(web::get().to(get_user))
                    .route(web::put().to(update_user))
                    .route(web::patch().to(update_user))
                    .route(web::delete().to(delete_user)),
            ),
    )
    .service(
        web::scope("/profiles")
            .wrap(middlewares::RequireJWT)
            // 只能访问自己的资料
            .service(web::resource("/").route(web::get().to(list_profiles)))
            .service(
                web::resource("/{id}/")
                    .route(web::get().to(get_profile))
                    .route(web::put().to(update_profile))
                    .route(web::patch().to(update_profile)),
            ),
    )
    .service(
        web::resource("/student/{id}/")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(get_student)),
    );
}
