use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::class_users::entities::ClassUserRole;

/// 班级成员列表项（带用户信息）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub struct ClassUserListItem {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub email: String,
    pub role: ClassUserRole,
    pub joined_at: String,
}

/// 班级成员列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub struct ClassUserListResponse {
    pub items: Vec<ClassUserListItem>,
    pub pagination: PaginationInfo,
}
