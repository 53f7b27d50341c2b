pub mod common;

pub mod admissions;
pub mod assignments;
pub mod auth;
pub mod class_users;
pub mod classes;
pub mod files;
pub mod meetings;
pub mod subjects;
pub mod submissions;
pub mod support;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间（用于启动耗时统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
