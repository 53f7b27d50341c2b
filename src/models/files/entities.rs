use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct File {
    pub id: i64,
    // 文件的唯一下载标识符
    pub download_token: String,
    // 原始文件名
    pub file_name: String,
    // 文件大小（以字节为单位）
    pub file_size: i64,
    // 文件类型
    pub file_type: String,
    // 上传者 ID
    pub user_id: i64,
    // 上传时间
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

impl File {
    /// 文件的持久下载地址
    pub fn download_url(token: &str) -> String {
        format!("/api/v1/files/{token}/download")
    }
}
