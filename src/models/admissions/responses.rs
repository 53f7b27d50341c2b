use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::admissions::entities::Admission;

/// 报名列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admission.ts")]
pub struct AdmissionListResponse {
    pub items: Vec<Admission>,
    pub pagination: PaginationInfo,
}
