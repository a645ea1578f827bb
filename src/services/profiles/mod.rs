pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::AssignEaseError;
use crate::models::users::{
    entities::Profile, requests::UpdateProfileRequest, responses::ProfileResponse,
};
use crate::storage::Storage;

pub struct ProfileService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfileService {
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

    // 当前用户自己的资料
    pub async fn list_profiles(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_own_profiles(self, request).await
    }

    pub async fn get_profile(
        &self,
        request: &HttpRequest,
        profile_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_own_profile(self, request, profile_id).await
    }

    // 按用户 ID 查询任意用户的资料
    pub async fn get_student(
        &self,
        request: &HttpRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_profile_by_user(self, request, user_id).await
    }

    pub async fn update_profile(
        &self,
        request: &HttpRequest,
        profile_id: i64,
        update_data: UpdateProfileRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_own_profile(self, request, profile_id, update_data).await
    }
}

/// 资料附带用户名与邮箱
pub(crate) async fn describe_profile(
    storage: &Arc<dyn Storage>,
    profile: Profile,
) -> Result<ProfileResponse, AssignEaseError> {
    let user = storage
        .get_user_by_id(profile.user_id)
        .await?
        .ok_or_else(super::not_found)?;
    Ok(ProfileResponse::new(profile, user))
}
