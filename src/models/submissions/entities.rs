use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态：submitted -> graded，评分后为终态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Submitted,
    Graded,
}

impl SubmissionStatus {
    pub const SUBMITTED: &'static str = "submitted";
    pub const GRADED: &'static str = "graded";
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::SUBMITTED => Ok(SubmissionStatus::Submitted),
            SubmissionStatus::GRADED => Ok(SubmissionStatus::Graded),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: submitted, graded"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "{}", SubmissionStatus::SUBMITTED),
            SubmissionStatus::Graded => write!(f, "{}", SubmissionStatus::GRADED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(SubmissionStatus::Submitted),
            "graded" => Ok(SubmissionStatus::Graded),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 提交实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: String,
    pub attachments: Vec<String>,
    pub status: SubmissionStatus,
    pub is_late: bool,
    pub score: Option<f64>,
    pub feedback: Option<String>,
    pub graded_by: Option<i64>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// 提交受理决策
///
/// 同一 (作业, 学生) 组合最多只有一条有效提交：
/// - 没有记录 → 新建
/// - 已有 submitted 记录 → 原地覆盖（内容/附件/时间替换，计数不变）
/// - 已有 graded 记录 → 拒绝（评分后不允许重交，没有 reopen 流程）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntakeDecision {
    Create,
    Overwrite { submission_id: i64 },
    RejectGraded,
}

/// 根据已有的有效提交决定本次提交的处理方式
pub fn decide_intake(existing: Option<&Submission>) -> IntakeDecision {
    match existing {
        None => IntakeDecision::Create,
        Some(sub) if sub.status == SubmissionStatus::Graded => IntakeDecision::RejectGraded,
        Some(sub) => IntakeDecision::Overwrite {
            submission_id: sub.id,
        },
    }
}

/// 校验评分是否在允许范围内
///
/// 作业定义了满分时要求 0 <= score <= points，否则只要求非负。
/// 这是服务端硬校验，不依赖前端输入控件的约束。
pub fn validate_score(score: f64, points: Option<i64>) -> Result<(), String> {
    if !score.is_finite() {
        return Err("Score must be a finite number".to_string());
    }
    if score < 0.0 {
        return Err("Score must not be negative".to_string());
    }
    if let Some(points) = points
        && score > points as f64
    {
        return Err(format!("Score must not exceed {points} points"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn submission(status: SubmissionStatus) -> Submission {
        Submission {
            id: 42,
            assignment_id: 1,
            student_id: 7,
            content: "answer text".to_string(),
            attachments: vec![],
            status,
            is_late: false,
            score: None,
            feedback: None,
            graded_by: None,
            graded_at: None,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_first_submission_creates() {
        assert_eq!(decide_intake(None), IntakeDecision::Create);
    }

    #[test]
    fn test_resubmission_overwrites_in_place() {
        let existing = submission(SubmissionStatus::Submitted);
        assert_eq!(
            decide_intake(Some(&existing)),
            IntakeDecision::Overwrite { submission_id: 42 }
        );
    }

    #[test]
    fn test_resubmission_after_grading_is_rejected() {
        let existing = submission(SubmissionStatus::Graded);
        assert_eq!(decide_intake(Some(&existing)), IntakeDecision::RejectGraded);
    }

    #[test]
    fn test_score_within_points_is_accepted() {
        assert!(validate_score(0.0, Some(100)).is_ok());
        assert!(validate_score(85.0, Some(100)).is_ok());
        assert!(validate_score(100.0, Some(100)).is_ok());
    }

    #[test]
    fn test_score_out_of_range_is_rejected() {
        assert!(validate_score(-1.0, Some(100)).is_err());
        assert!(validate_score(100.5, Some(100)).is_err());
        assert!(validate_score(f64::NAN, Some(100)).is_err());
        assert!(validate_score(f64::INFINITY, None).is_err());
    }

    #[test]
    fn test_score_without_points_only_requires_non_negative() {
        assert!(validate_score(9999.0, None).is_ok());
        assert!(validate_score(-0.5, None).is_err());
    }
}
