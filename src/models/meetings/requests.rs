use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::models::meetings::entities::MeetingMode;

/// 创建会议请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/meeting.ts")]
pub struct CreateMeetingRequest {
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub mode: MeetingMode,
    /// 预约会议的开始时间；即时会议忽略该字段
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// 会议列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/meeting.ts")]
pub struct MeetingListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    /// 只看未开始的会议
    pub upcoming: Option<bool>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct MeetingListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
    pub upcoming: Option<bool>,
}

impl From<MeetingListParams> for MeetingListQuery {
    fn from(params: MeetingListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            class_id: params.class_id,
            upcoming: params.upcoming,
        }
    }
}
