use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: i64,
    // 科目名称
    pub name: String,
    // 科目代码（可选，如 "MATH101"）
    pub code: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
