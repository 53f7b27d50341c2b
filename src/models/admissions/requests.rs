use serde::Deserialize;
use ts_rs::TS;

use crate::models::admissions::entities::AdmissionStatus;
use crate::models::common::pagination::PaginationQuery;

/// 招生报名请求（公开表单，无需登录）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admission.ts")]
pub struct CreateAdmissionRequest {
    pub student_name: String,
    pub guardian_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub grade_applied: String,
    pub message: Option<String>,
}

/// 更新报名状态请求（管理员）
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/admission.ts")]
pub struct UpdateAdmissionRequest {
    pub status: AdmissionStatus,
}

/// 报名列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admission.ts")]
pub struct AdmissionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<AdmissionStatus>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AdmissionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<AdmissionStatus>,
}

impl From<AdmissionListParams> for AdmissionListQuery {
    fn from(params: AdmissionListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            status: params.status,
        }
    }
}
