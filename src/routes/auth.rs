use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auth::requests::{LoginRequest, RefreshTokenRequest};
use crate::models::users::requests::RegisterRequest;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(&req, login_data.into_inner()).await
}

pub async fn refresh_token(
    refresh_data: web::Json<RefreshTokenRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(refresh_data.into_inner()).await
}

pub async fn register(
    req: HttpRequest,
    register_data: web::Json<RegisterRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.register(&req, register_data.into_inner()).await
}

// 配置路由，均无需认证
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register/").route(web::post().to(register)))
        .service(
            web::scope("/api/token")
                .route("/", web::post().to(login))
                .route("/refresh/", web::post().to(refresh_token)),
        );
}
