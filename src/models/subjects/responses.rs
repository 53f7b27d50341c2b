use serde::Serialize;
use ts_rs::TS;

use crate::models::subjects::entities::Subject;

/// 科目列表响应（科目数量有限，不分页）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListResponse {
    pub items: Vec<Subject>,
}
