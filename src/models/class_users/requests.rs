use serde::Deserialize;
use ts_rs::TS;

use crate::models::class_users::entities::ClassUserRole;
use crate::models::common::pagination::PaginationQuery;

/// 通过邀请码加入班级
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub struct JoinClassRequest {
    pub invite_code: String,
}

/// 管理员/教师直接添加成员
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub struct AddClassUserRequest {
    pub user_id: i64,
    pub role: ClassUserRole,
}

/// 班级成员列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub struct ClassUserListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<ClassUserRole>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct ClassUserQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<ClassUserRole>,
}

impl From<ClassUserListParams> for ClassUserQuery {
    fn from(params: ClassUserListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            role: params.role,
        }
    }
}
