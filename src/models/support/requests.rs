use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

/// 提交咨询问题请求（公开表单，无需登录）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/support.ts")]
pub struct CreateSupportQuestionRequest {
    pub name: String,
    pub email: String,
    pub question: String,
}

/// 咨询问题列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/support.ts")]
pub struct SupportQuestionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub answered: Option<bool>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SupportQuestionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub answered: Option<bool>,
}

impl From<SupportQuestionListParams> for SupportQuestionListQuery {
    fn from(params: SupportQuestionListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            answered: params.answered,
        }
    }
}
