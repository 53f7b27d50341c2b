use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::assignments::entities::{Assignment, EffectiveStatus};

/// 作业创建者信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentCreator {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

/// 当前学生对某作业的提交摘要
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct MySubmissionSummary {
    pub id: i64,
    pub status: String,
    pub is_late: bool,
    pub score: Option<f64>,
    pub submitted_at: String,
}

/// 作业统计摘要（教师/管理员视角）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentStatsSummary {
    pub total_students: i64,
    pub submitted_count: i64,
    pub graded_count: i64,
}

/// 作业列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    /// 展示状态（叠加 overdue 后的结果）
    pub effective_status: EffectiveStatus,
    /// 材料下载地址（由 material token 派生）
    pub material_url: Option<String>,
    pub creator: Option<AssignmentCreator>,
    pub my_submission: Option<MySubmissionSummary>,
    pub stats_summary: Option<AssignmentStatsSummary>,
}

/// 作业列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<AssignmentListItem>,
    pub pagination: PaginationInfo,
}

/// 作业详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentDetailResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub effective_status: EffectiveStatus,
    pub material_url: Option<String>,
    pub creator: Option<AssignmentCreator>,
    pub my_submission: Option<MySubmissionSummary>,
    pub stats_summary: Option<AssignmentStatsSummary>,
}
