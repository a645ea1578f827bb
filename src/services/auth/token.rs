use actix_web::{HttpResponse, Result as ActixResult};
use tracing::debug;

use crate::errors::AssignEaseError;
use crate::models::auth::{requests::RefreshTokenRequest, responses::RefreshTokenResponse};
use crate::utils::jwt::JwtUtils;

pub async fn handle_refresh_token(
    refresh_request: RefreshTokenRequest,
) -> ActixResult<HttpResponse> {
    let access = JwtUtils::refresh_access_token(&refresh_request.refresh).map_err(|e| {
        debug!("Refresh token rejected: {}", e);
        AssignEaseError::authentication("Token is invalid or expired")
    })?;

    Ok(HttpResponse::Ok().json(RefreshTokenResponse { access }))
}
