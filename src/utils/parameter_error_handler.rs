//! 请求参数解析失败时的统一错误响应
//!
//! JSON 请求体、查询参数、路径参数解析失败都返回 400 {"detail": ...}

use actix_web::{
    Error, HttpRequest,
    error::{JsonPayloadError, PathError, QueryPayloadError},
};

use crate::errors::AssignEaseError;

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::debug!("JSON 解析失败 {}: {}", req.path(), err);
    let message = match &err {
        JsonPayloadError::ContentType => {
            "Unsupported media type, expected application/json".to_string()
        }
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large".to_string()
        }
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        _ => format!("Invalid request body: {err}"),
    };
    AssignEaseError::validation(message).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    tracing::debug!("查询参数解析失败 {}: {}", req.path(), err);
    AssignEaseError::validation(format!("Invalid query parameters: {err}")).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    tracing::debug!("路径参数解析失败 {}: {}", req.path(), err);
    AssignEaseError::validation(format!("Invalid path parameters: {err}")).into()
}
