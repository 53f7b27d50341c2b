use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::submissions::entities::SubmissionStatus;

// 作业状态（教师/全局视角，区别于学生个人的提交状态）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentStatus {
    Pending,   // 未关闭
    Submitted, // 已有提交
    Graded,    // 已评分
}

impl AssignmentStatus {
    pub const PENDING: &'static str = "pending";
    pub const SUBMITTED: &'static str = "submitted";
    pub const GRADED: &'static str = "graded";
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AssignmentStatus::PENDING => Ok(AssignmentStatus::Pending),
            AssignmentStatus::SUBMITTED => Ok(AssignmentStatus::Submitted),
            AssignmentStatus::GRADED => Ok(AssignmentStatus::Graded),
            _ => Err(serde::de::Error::custom(format!(
                "无效的作业状态: '{s}'. 支持的状态: pending, submitted, graded"
            ))),
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Pending => write!(f, "{}", AssignmentStatus::PENDING),
            AssignmentStatus::Submitted => write!(f, "{}", AssignmentStatus::SUBMITTED),
            AssignmentStatus::Graded => write!(f, "{}", AssignmentStatus::GRADED),
        }
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AssignmentStatus::Pending),
            "submitted" => Ok(AssignmentStatus::Submitted),
            "graded" => Ok(AssignmentStatus::Graded),
            _ => Err(format!("Invalid assignment status: {s}")),
        }
    }
}

// 作业优先级
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentPriority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for AssignmentPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentPriority::Low => write!(f, "low"),
            AssignmentPriority::Medium => write!(f, "medium"),
            AssignmentPriority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for AssignmentPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(AssignmentPriority::Low),
            "medium" => Ok(AssignmentPriority::Medium),
            "high" => Ok(AssignmentPriority::High),
            _ => Err(format!("Invalid assignment priority: {s}")),
        }
    }
}

// 作业类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentKind {
    Assignment,
    Quiz,
    Material,
}

impl std::fmt::Display for AssignmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentKind::Assignment => write!(f, "assignment"),
            AssignmentKind::Quiz => write!(f, "quiz"),
            AssignmentKind::Material => write!(f, "material"),
        }
    }
}

impl std::str::FromStr for AssignmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assignment" => Ok(AssignmentKind::Assignment),
            "quiz" => Ok(AssignmentKind::Quiz),
            "material" => Ok(AssignmentKind::Material),
            _ => Err(format!("Invalid assignment kind: {s}")),
        }
    }
}

// 作业实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 关联的班级 ID
    pub class_id: i64,
    // 创建者（教师）ID
    pub created_by: i64,
    // 作业标题
    pub title: String,
    // 科目名称
    pub subject: String,
    // 作业描述
    pub description: Option<String>,
    // 满分（可选，非负）
    pub points: Option<i64>,
    // 课件/材料文件 token
    pub material: Option<String>,
    // 优先级
    pub priority: AssignmentPriority,
    // 作业类型
    pub kind: AssignmentKind,
    // 作业状态
    pub status: AssignmentStatus,
    // 截止日期
    pub due_date: chrono::DateTime<chrono::Utc>,
    // 截止时间（展示用，HH:MM）
    pub due_time: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 展示状态：在存储状态之上叠加 "overdue"，只在读取时计算，从不落库。
///
/// 所有界面都必须通过这里派生状态，保证同一作业在不同页面不会显示出
/// 不同的状态。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum EffectiveStatus {
    Pending,
    Submitted,
    Graded,
    Overdue,
}

impl std::fmt::Display for EffectiveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectiveStatus::Pending => write!(f, "pending"),
            EffectiveStatus::Submitted => write!(f, "submitted"),
            EffectiveStatus::Graded => write!(f, "graded"),
            EffectiveStatus::Overdue => write!(f, "overdue"),
        }
    }
}

/// 计算作业的展示状态（教师/全局视角）
///
/// 规则：存储状态为 pending 且已过截止时间 → overdue；否则原样返回。
pub fn effective_status(
    status: AssignmentStatus,
    due_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> EffectiveStatus {
    match status {
        AssignmentStatus::Pending if now > due_date => EffectiveStatus::Overdue,
        AssignmentStatus::Pending => EffectiveStatus::Pending,
        AssignmentStatus::Submitted => EffectiveStatus::Submitted,
        AssignmentStatus::Graded => EffectiveStatus::Graded,
    }
}

/// 计算学生个人视角的展示状态
///
/// 学生视角由本人的有效提交派生：无提交时按 pending/overdue 处理，
/// 有提交时跟随提交状态。
pub fn student_effective_status(
    submission_status: Option<SubmissionStatus>,
    due_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> EffectiveStatus {
    match submission_status {
        None => effective_status(AssignmentStatus::Pending, due_date, now),
        Some(SubmissionStatus::Submitted) => EffectiveStatus::Submitted,
        Some(SubmissionStatus::Graded) => EffectiveStatus::Graded,
    }
}

impl Assignment {
    pub fn effective_status(&self, now: DateTime<Utc>) -> EffectiveStatus {
        effective_status(self.status, self.due_date, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_pending_before_due_date_is_unchanged() {
        let now = Utc::now();
        let due = now + Duration::days(1);
        assert_eq!(
            effective_status(AssignmentStatus::Pending, due, now),
            EffectiveStatus::Pending
        );
    }

    #[test]
    fn test_pending_past_due_date_is_overdue() {
        // 场景：pending 且截止日期在昨天 → overdue
        let now = Utc::now();
        let due = now - Duration::days(1);
        assert_eq!(
            effective_status(AssignmentStatus::Pending, due, now),
            EffectiveStatus::Overdue
        );
    }

    #[test]
    fn test_non_pending_never_becomes_overdue() {
        let now = Utc::now();
        let due = now - Duration::days(7);
        assert_eq!(
            effective_status(AssignmentStatus::Submitted, due, now),
            EffectiveStatus::Submitted
        );
        assert_eq!(
            effective_status(AssignmentStatus::Graded, due, now),
            EffectiveStatus::Graded
        );
    }

    #[test]
    fn test_due_date_boundary_is_not_overdue() {
        // 恰好等于截止时间不算过期
        let now = Utc::now();
        assert_eq!(
            effective_status(AssignmentStatus::Pending, now, now),
            EffectiveStatus::Pending
        );
    }

    #[test]
    fn test_student_view_without_submission() {
        let now = Utc::now();
        assert_eq!(
            student_effective_status(None, now + Duration::hours(2), now),
            EffectiveStatus::Pending
        );
        assert_eq!(
            student_effective_status(None, now - Duration::hours(2), now),
            EffectiveStatus::Overdue
        );
    }

    #[test]
    fn test_student_view_follows_own_submission() {
        let now = Utc::now();
        let due = now - Duration::days(1);
        // 已提交的学生永远看不到 overdue
        assert_eq!(
            student_effective_status(Some(SubmissionStatus::Submitted), due, now),
            EffectiveStatus::Submitted
        );
        assert_eq!(
            student_effective_status(Some(SubmissionStatus::Graded), due, now),
            EffectiveStatus::Graded
        );
    }
}
