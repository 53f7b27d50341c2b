use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 招生报名状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/admission.ts")]
pub enum AdmissionStatus {
    New,
    Reviewed,
    Accepted,
    Rejected,
}

impl<'de> Deserialize<'de> for AdmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "new" => Ok(AdmissionStatus::New),
            "reviewed" => Ok(AdmissionStatus::Reviewed),
            "accepted" => Ok(AdmissionStatus::Accepted),
            "rejected" => Ok(AdmissionStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的报名状态: '{s}'. 支持: new, reviewed, accepted, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for AdmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdmissionStatus::New => write!(f, "new"),
            AdmissionStatus::Reviewed => write!(f, "reviewed"),
            AdmissionStatus::Accepted => write!(f, "accepted"),
            AdmissionStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for AdmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(AdmissionStatus::New),
            "reviewed" => Ok(AdmissionStatus::Reviewed),
            "accepted" => Ok(AdmissionStatus::Accepted),
            "rejected" => Ok(AdmissionStatus::Rejected),
            _ => Err(format!("Invalid admission status: {s}")),
        }
    }
}

// 招生报名记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admission.ts")]
pub struct Admission {
    pub id: i64,
    pub student_name: String,
    pub guardian_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub grade_applied: String,
    pub message: Option<String>,
    pub status: AdmissionStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
