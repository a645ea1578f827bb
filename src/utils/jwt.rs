use crate::config::AppConfig;
use crate::models::users::entities::UserRole;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN: &str = "access";
pub const REFRESH_TOKEN: &str = "refresh";

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,             // Subject (user ID)
    pub role: Option<UserRole>,  // 用户角色，没有 Profile 时为 null
    pub token_type: String,      // token类型: "access" 或 "refresh"
    pub exp: usize,              // Expiration time (时间戳)
    pub iat: usize,              // Issued at (签发时间)
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, jsonwebtoken::errors::Error> {
        self.sub
            .parse::<i64>()
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidSubject.into())
    }
}

// Token 对
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> &'static str {
        &AppConfig::get().jwt.secret
    }

    // 生成 Access Token
    pub fn generate_access_token(
        user_id: i64,
        role: Option<UserRole>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            user_id,
            role,
            ACCESS_TOKEN,
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    // 生成 Refresh Token
    pub fn generate_refresh_token(
        user_id: i64,
        role: Option<UserRole>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            user_id,
            role,
            REFRESH_TOKEN,
            chrono::Duration::days(config.jwt.refresh_token_expiry),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        user_id: i64,
        role: Option<UserRole>,
        token_type: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            token_type: token_type.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let encoding_key = EncodingKey::from_secret(Self::get_secret().as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
    }

    // 生成 access 与 refresh token
    pub fn generate_token_pair(
        user_id: i64,
        role: Option<UserRole>,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        let access_token = Self::generate_access_token(user_id, role)?;
        let refresh_token = Self::generate_refresh_token(user_id, role)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    // 验证 JWT token
    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(Self::get_secret().as_bytes());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    // 验证 token 是否为指定类型
    pub fn verify_token_type(
        token: &str,
        expected_type: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = Self::verify_token(token)?;
        if claims.token_type != expected_type {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }

    // 验证 Access Token
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, ACCESS_TOKEN)
    }

    // 验证 Refresh Token
    pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, REFRESH_TOKEN)
    }

    // 使用 Refresh Token 生成新的 Access Token
    pub fn refresh_access_token(
        refresh_token: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Self::verify_refresh_token(refresh_token)?;
        let user_id = claims.user_id()?;
        Self::generate_access_token(user_id, claims.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_carries_role() {
        let token = JwtUtils::generate_access_token(42, Some(UserRole::Teacher)).unwrap();
        let claims = JwtUtils::verify_access_token(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.role, Some(UserRole::Teacher));
        assert_eq!(claims.token_type, ACCESS_TOKEN);
    }

    #[test]
    fn test_missing_role_is_null() {
        let token = JwtUtils::generate_access_token(7, None).unwrap();
        let claims = JwtUtils::verify_token(&token).unwrap();
        assert_eq!(claims.role, None);
    }

    #[test]
    fn test_token_type_is_enforced() {
        let pair = JwtUtils::generate_token_pair(1, Some(UserRole::Student)).unwrap();
        assert!(JwtUtils::verify_access_token(&pair.refresh_token).is_err());
        assert!(JwtUtils::verify_refresh_token(&pair.access_token).is_err());
        assert!(JwtUtils::verify_refresh_token(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_refresh_issues_access_token() {
        let pair = JwtUtils::generate_token_pair(5, Some(UserRole::Student)).unwrap();
        let access = JwtUtils::refresh_access_token(&pair.refresh_token).unwrap();
        let claims = JwtUtils::verify_access_token(&access).unwrap();
        assert_eq!(claims.sub, "5");
        assert_eq!(claims.role, Some(UserRole::Student));
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = JwtUtils::generate_token_with_expiry(
            1,
            None,
            ACCESS_TOKEN,
            chrono::Duration::minutes(-10),
        )
        .unwrap();
        assert!(JwtUtils::verify_access_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(JwtUtils::verify_token("not-a-token").is_err());
    }
}
