use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::assignments::entities::{
    AssignmentKind, AssignmentPriority, AssignmentStatus, EffectiveStatus,
};
use crate::models::common::pagination::PaginationQuery;

/// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub class_id: i64,
    pub title: String,
    pub subject: String,
    pub description: Option<String>,
    pub points: Option<i64>,
    /// 已上传材料的 download_token；创建前会校验其存在与所有权
    pub material: Option<String>,
    pub priority: Option<AssignmentPriority>,
    pub kind: Option<AssignmentKind>,
    pub due_date: DateTime<Utc>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub due_time: Option<String>, // HH:MM
}

/// 更新作业请求
///
/// 显式列出全部可变字段；未出现在请求里的字段保持原值（特别是
/// material：不带该字段的编辑不会清掉已有材料）。未知字段直接拒绝。
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub points: Option<i64>,
    pub material: Option<String>,
    pub priority: Option<AssignmentPriority>,
    pub kind: Option<AssignmentKind>,
    pub status: Option<AssignmentStatus>,
    pub due_date: Option<DateTime<Utc>>, // ISO 8601 格式
    pub due_time: Option<String>,
}

impl UpdateAssignmentRequest {
    /// 请求是否为空补丁（没有任何待更新字段）
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subject.is_none()
            && self.description.is_none()
            && self.points.is_none()
            && self.material.is_none()
            && self.priority.is_none()
            && self.kind.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
            && self.due_time.is_none()
    }
}

/// 作业列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    pub created_by: Option<i64>,
    /// 按展示状态过滤（pending/submitted/graded/overdue）
    pub status: Option<EffectiveStatus>,
    pub search: Option<String>,
    /// 是否包含统计信息（教师/管理员视角）
    pub include_stats: Option<bool>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
    /// 限定到一组班级（学生视角：本人所在的班级），仅内部使用
    pub class_ids: Option<Vec<i64>>,
    pub created_by: Option<i64>,
    pub status: Option<EffectiveStatus>,
    pub search: Option<String>,
    pub include_stats: Option<bool>,
}

impl From<AssignmentListParams> for AssignmentListQuery {
    fn from(params: AssignmentListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            class_id: params.class_id,
            class_ids: None,
            created_by: params.created_by,
            status: params.status,
            search: params.search,
            include_stats: params.include_stats,
        }
    }
}

impl<'de> Deserialize<'de> for EffectiveStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(EffectiveStatus::Pending),
            "submitted" => Ok(EffectiveStatus::Submitted),
            "graded" => Ok(EffectiveStatus::Graded),
            "overdue" => Ok(EffectiveStatus::Overdue),
            _ => Err(serde::de::Error::custom(format!(
                "无效的状态过滤: '{s}'. 支持: pending, submitted, graded, overdue"
            ))),
        }
    }
}
