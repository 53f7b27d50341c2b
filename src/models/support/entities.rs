use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 咨询问题（公开表单提交）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/support.ts")]
pub struct SupportQuestion {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub question: String,
    pub answered: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
