//! 安全的路径参数提取器
//!
//! 路径中的 ID 必须是正整数；非数字或非正数的 ID 不可能对应任何记录，返回 404。

/// 定义一个从路径参数解析正整数 ID 的提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let result = match req.match_info().get($param) {
                    None => Err($crate::errors::AssignEaseError::validation(format!(
                        "Missing path parameter: {}",
                        $param
                    ))),
                    Some(raw) => match raw.parse::<i64>() {
                        Ok(id) if id > 0 => Ok($name(id)),
                        _ => {
                            ::tracing::debug!("Invalid path id {}: {}", $param, raw);
                            Err($crate::errors::AssignEaseError::not_found("Not found."))
                        }
                    },
                };
                std::future::ready(result.map_err(actix_web::Error::from))
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeClassIdI64, "class_id");
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafeQuestionIdI64, "question_id");
define_safe_i64_extractor!(SafeSubmissionIdI64, "submission_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{FromRequest, test::TestRequest};

    #[actix_web::test]
    async fn test_positive_id_is_extracted() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        let id = SafeIDI64::extract(&req).await.unwrap();
        assert_eq!(id, SafeIDI64(42));
    }

    #[actix_web::test]
    async fn test_invalid_id_is_not_found() {
        for raw in ["0", "-3", "abc"] {
            let req = TestRequest::default().param("class_id", raw).to_http_request();
            let err = SafeClassIdI64::extract(&req).await.unwrap_err();
            assert_eq!(
                err.as_response_error().status_code(),
                actix_web::http::StatusCode::NOT_FOUND
            );
        }
    }

    #[actix_web::test]
    async fn test_missing_param_is_bad_request() {
        let req = TestRequest::default().to_http_request();
        assert!(SafeSubmissionIdI64::extract(&req).await.is_err());
    }
}
