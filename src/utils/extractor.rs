//! 路径参数安全提取器
//!
//! 将 `/xxx/{id}` 形式的路径参数解析为正整数 ID，解析失败时返回统一的
//! 400 响应，避免在每个处理函数里重复校验。

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use futures_util::future::{Ready, ready};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ApiResponse, ErrorCode};

static FILE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{8,64}$").expect("Invalid file token regex"));

fn bad_request(message: &str) -> actix_web::Error {
    ErrorBadRequest(
        serde_json::to_string(&ApiResponse::<()>::error_empty(
            ErrorCode::InvalidParameter,
            message,
        ))
        .unwrap_or_else(|_| message.to_string()),
    )
}

fn parse_id_segment(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| bad_request("Missing path parameter"))?;

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(bad_request("Path parameter must be a positive integer")),
    }
}

/// 定义按路径段名提取正整数 ID 的提取器
macro_rules! define_id_extractor {
    ($(
        $name:ident($segment:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    ready(parse_id_segment(req, $segment).map($name))
                }
            }
        )*
    };
}

define_id_extractor! {
    SafeIDI64("id"),
    SafeUserIdI64("user_id"),
    SafeClassIdI64("class_id"),
    SafeAssignmentIdI64("assignment_id"),
    SafeSubmissionIdI64("submission_id"),
    SafeMeetingIdI64("meeting_id"),
    SafeAdmissionIdI64("admission_id"),
}

/// 文件下载 token 提取器，限制为安全字符集
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("token")
            .filter(|raw| FILE_TOKEN_RE.is_match(raw))
            .map(|raw| SafeFileToken(raw.to_string()))
            .ok_or_else(|| bad_request("Invalid file token"));
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_token_charset() {
        assert!(FILE_TOKEN_RE.is_match("a1b2c3d4-e5f6"));
        assert!(FILE_TOKEN_RE.is_match("0af9c2cbd94b4a6f8e51"));
        assert!(!FILE_TOKEN_RE.is_match("short"));
        assert!(!FILE_TOKEN_RE.is_match("../../etc/passwd"));
        assert!(!FILE_TOKEN_RE.is_match("token with spaces"));
    }
}
