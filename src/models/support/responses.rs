use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::support::entities::SupportQuestion;

/// 咨询问题列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/support.ts")]
pub struct SupportQuestionListResponse {
    pub items: Vec<SupportQuestion>,
    pub pagination: PaginationInfo,
}
