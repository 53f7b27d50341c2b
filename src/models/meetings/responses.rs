use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::meetings::entities::Meeting;

/// 会议列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/meeting.ts")]
pub struct MeetingListResponse {
    pub items: Vec<Meeting>,
    pub pagination: PaginationInfo,
}
