//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称和 HTTP 状态码。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;

pub const UNIQUE_VIOLATION_DETAIL: &str = "A record with these values already exists.";
pub const FOREIGN_KEY_VIOLATION_DETAIL: &str = "Referenced object does not exist.";

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_assignease_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AssignEaseError {
            $($variant(String),)*
        }

        impl AssignEaseError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AssignEaseError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AssignEaseError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AssignEaseError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AssignEaseError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AssignEaseError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_assignease_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    PasswordHash("E008", "Password Hash Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
    Internal("E011", "Internal Error"),
}

impl AssignEaseError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 对应的 HTTP 状态码
    pub fn http_status(&self) -> StatusCode {
        match self {
            AssignEaseError::Validation(_)
            | AssignEaseError::Serialization(_)
            | AssignEaseError::DateParse(_) => StatusCode::BAD_REQUEST,
            AssignEaseError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AssignEaseError::Authorization(_) => StatusCode::FORBIDDEN,
            AssignEaseError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 将数据库错误分类：唯一约束与外键约束冲突视为校验错误
    ///
    /// 约束冲突的上下文只写入日志，返回给客户端的是固定的英文提示。
    pub fn from_db(context: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                tracing::debug!("{context}: unique constraint violated ({msg})");
                AssignEaseError::Validation(UNIQUE_VIOLATION_DETAIL.to_string())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                tracing::debug!("{context}: foreign key constraint violated ({msg})");
                AssignEaseError::Validation(FOREIGN_KEY_VIOLATION_DETAIL.to_string())
            }
            _ => AssignEaseError::DatabaseOperation(format!("{context}: {err}")),
        }
    }
}

impl fmt::Display for AssignEaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AssignEaseError {}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub detail: &'a str,
}

impl ResponseError for AssignEaseError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!("{} [{}]", self.format_simple(), self.code());
        } else {
            tracing::debug!("{} [{}]", self.format_simple(), self.code());
        }
        HttpResponse::build(status).json(ErrorBody {
            detail: self.message(),
        })
    }
}

// 为常见的错误类型实现 From trait
impl From<DbErr> for AssignEaseError {
    fn from(err: DbErr) -> Self {
        AssignEaseError::from_db("Database operation failed", err)
    }
}

impl From<serde_json::Error> for AssignEaseError {
    fn from(err: serde_json::Error) -> Self {
        AssignEaseError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for AssignEaseError {
    fn from(err: chrono::ParseError) -> Self {
        AssignEaseError::DateParse(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AssignEaseError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AssignEaseError::Authentication(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssignEaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AssignEaseError::database_config("test").code(), "E001");
        assert_eq!(AssignEaseError::validation("test").code(), "E004");
        assert_eq!(AssignEaseError::not_found("test").code(), "E005");
        assert_eq!(AssignEaseError::authentication("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AssignEaseError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            AssignEaseError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AssignEaseError::validation("Invalid status");
        assert_eq!(err.message(), "Invalid status");
    }

    #[test]
    fn test_format_simple() {
        let err = AssignEaseError::not_found("Class not found.");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Class not found."));
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            AssignEaseError::validation("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AssignEaseError::authentication("x").http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AssignEaseError::authorization("x").http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AssignEaseError::not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AssignEaseError::database_operation("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AssignEaseError::internal("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_plain_db_error_is_operation_error() {
        let err = AssignEaseError::from_db("Query failed", DbErr::Custom("boom".into()));
        assert_eq!(err.code(), "E003");
        assert!(err.message().starts_with("Query failed"));
    }
}
