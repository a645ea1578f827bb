pub mod login;
pub mod register;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::AssignEaseError;
use crate::models::auth::requests::{LoginRequest, RefreshTokenRequest};
use crate::models::users::requests::RegisterRequest;
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    pub async fn register(
        &self,
        request: &HttpRequest,
        register_request: RegisterRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, request, register_request).await
    }

    pub async fn login(
        &self,
        request: &HttpRequest,
        login_request: LoginRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, request, login_request).await
    }

    // 使用 refresh token 换取新的 access token
    pub async fn refresh_token(
        &self,
        refresh_request: RefreshTokenRequest,
    ) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(refresh_request).await
    }
}
