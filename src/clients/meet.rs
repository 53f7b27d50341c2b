//! 日历/会议服务客户端
//!
//! 对接外部会议服务：给定标题、时间、描述和参会人邮箱列表，创建一个
//! 日历事件并返回可加入的会议链接与事件 ID。
//!
//! 错误分为三类，调用方据此决定提示用户重新授权还是稍后重试：
//! - `AuthExpired`: 凭证过期或无效，需要重新授权
//! - `Unavailable`: 服务端暂时不可用或网络问题，可以重试
//! - `InvalidResponse`: 请求被拒绝或响应不符合约定，重试无意义

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::AppConfig;

/// 会议服务错误
#[derive(Debug, Clone, PartialEq)]
pub enum MeetError {
    AuthExpired(String),
    Unavailable(String),
    InvalidResponse(String),
}

impl std::fmt::Display for MeetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeetError::AuthExpired(msg) => write!(f, "Meet provider auth expired: {msg}"),
            MeetError::Unavailable(msg) => write!(f, "Meet provider unavailable: {msg}"),
            MeetError::InvalidResponse(msg) => write!(f, "Meet provider rejected request: {msg}"),
        }
    }
}

impl std::error::Error for MeetError {}

/// 创建事件请求体
#[derive(Debug, Serialize)]
pub struct CreateEventRequest {
    pub title: String,
    /// ISO-8601 格式的开始时间
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub participants: Vec<String>,
}

/// 创建成功后返回的事件信息
#[derive(Debug, Clone, Deserialize)]
pub struct MeetEvent {
    pub meet_link: String,
    pub event_id: String,
}

/// 按 HTTP 状态码归类会议服务错误
///
/// 401/403 视为凭证问题，5xx/429 视为可重试的暂时故障，其余 4xx 为
/// 请求本身的问题。
fn classify_status(status: u16, body: String) -> MeetError {
    match status {
        401 | 403 => MeetError::AuthExpired(body),
        429 | 500..=599 => MeetError::Unavailable(body),
        _ => MeetError::InvalidResponse(body),
    }
}

pub struct MeetClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl MeetClient {
    /// 从全局配置构建客户端（带请求超时）
    pub fn new() -> Result<Self, MeetError> {
        let config = AppConfig::get();
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.meet.timeout))
            .build()
            .map_err(|e| MeetError::Unavailable(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.meet.base_url.trim_end_matches('/').to_string(),
            api_token: config.meet.api_token.clone(),
        })
    }

    /// 创建日历事件并返回会议链接
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<MeetEvent, MeetError> {
        let url = format!("{}/v1/events", self.base_url);

        info!(
            "Creating meet event '{}' with {} participant(s)",
            request.title,
            request.participants.len()
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Meet provider request failed: {}", e);
                // 超时与连接错误都按暂时故障处理
                MeetError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Meet provider returned status {} for event creation",
                status
            );
            return Err(classify_status(status.as_u16(), body));
        }

        response
            .json::<MeetEvent>()
            .await
            .map_err(|e| MeetError::InvalidResponse(format!("Malformed provider response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_are_classified_as_expired() {
        assert_eq!(
            classify_status(401, "token expired".into()),
            MeetError::AuthExpired("token expired".into())
        );
        assert_eq!(
            classify_status(403, "insufficient scope".into()),
            MeetError::AuthExpired("insufficient scope".into())
        );
    }

    #[test]
    fn test_server_errors_are_retryable() {
        assert!(matches!(
            classify_status(500, String::new()),
            MeetError::Unavailable(_)
        ));
        assert!(matches!(
            classify_status(503, String::new()),
            MeetError::Unavailable(_)
        ));
        assert!(matches!(
            classify_status(429, String::new()),
            MeetError::Unavailable(_)
        ));
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        assert!(matches!(
            classify_status(400, String::new()),
            MeetError::InvalidResponse(_)
        ));
        assert!(matches!(
            classify_status(422, String::new()),
            MeetError::InvalidResponse(_)
        ));
    }
}
