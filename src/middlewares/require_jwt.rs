/*!
 * JWT 认证中间件
 *
 * 验证 `Authorization: Bearer <access>` 中的访问令牌，
 * 从存储层加载用户与其 Profile，并把 [`CurrentUser`] 写入请求扩展。
 *
 * ```rust,ignore
 * web::scope("/classes")
 *     .wrap(RequireJWT)
 *     .route("/", web::get().to(list_classes))
 * ```
 *
 * 处理程序中通过 [`RequireJWT::extract_current_user`] 获取请求者。
 * 令牌缺失、无效、过期或用户已不存在时返回 401 `{"detail": ...}`。
 */

use crate::errors::AssignEaseError;
use crate::models::users::entities::{CurrentUser, UserRole};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse, ResponseError,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：提取并验证 JWT access token，返回当前用户
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<CurrentUser, AssignEaseError> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| {
            AssignEaseError::authentication("Authentication credentials were not provided.")
        })?;

    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        AssignEaseError::authentication("Given token not valid for any token type")
    })?;

    let user_id = claims.user_id().map_err(|_| {
        AssignEaseError::authentication("Token contained no recognizable user identification")
    })?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .ok_or_else(|| AssignEaseError::internal("Storage not found in app data"))?
        .get_ref()
        .clone();

    let user = storage
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| AssignEaseError::authentication("User not found"))?;

    // 角色以数据库中的 Profile 为准
    let role: Option<UserRole> = storage
        .get_profile_by_user_id(user.id)
        .await?
        .map(|profile| profile.role);

    Ok(CurrentUser {
        id: user.id,
        username: user.username,
        role,
    })
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(
                    req.into_response(HttpResponse::NoContent().finish().map_into_right_body())
                );
            }

            match extract_and_validate_jwt(&req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(err.error_response().map_into_right_body()))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl RequireJWT {
    /// 从请求扩展中提取当前用户
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_current_user(req: &actix_web::HttpRequest) -> Option<CurrentUser> {
        req.extensions().get::<CurrentUser>().cloned()
    }

    /// 提取当前用户，缺失时返回 401
    pub fn require_current_user(
        req: &actix_web::HttpRequest,
    ) -> Result<CurrentUser, AssignEaseError> {
        Self::extract_current_user(req).ok_or_else(|| {
            AssignEaseError::authentication("Authentication credentials were not provided.")
        })
    }
}
