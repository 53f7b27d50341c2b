//! 请求参数错误处理器
//!
//! 把 actix-web 默认的 JSON/Query 反序列化错误包装成统一的 ApiResponse。

use actix_web::{HttpRequest, HttpResponse, error::Error};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> Error {
    let message = format!("Invalid JSON payload: {err}");
    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
            ErrorCode::InvalidParameter,
            message,
        )),
    )
    .into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: actix_web::error::QueryPayloadError, _req: &HttpRequest) -> Error {
    let message = format!("Invalid query parameter: {err}");
    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
            ErrorCode::InvalidParameter,
            message,
        )),
    )
    .into()
}
