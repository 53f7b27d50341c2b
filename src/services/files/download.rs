use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;

use super::FileService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 按 token 下载文件
pub async fn handle_download(
    service: &FileService,
    request: &HttpRequest,
    token: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let file = match storage.get_file_by_token(&token).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "文件不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询文件失败: {e}"),
                )),
            );
        }
    };

    let config = AppConfig::get();
    let file_path = format!("{}/{}.bin", config.upload.dir, file.download_token);

    if !Path::new(&file_path).exists() {
        tracing::error!("File record exists but blob missing on disk: {}", file_path);
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "文件内容不存在",
        )));
    }

    let content = match std::fs::read(&file_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Failed to read file {}: {}", file_path, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "读取文件失败",
                )),
            );
        }
    };

    let content_type = if file.file_type.is_empty() {
        "application/octet-stream".to_string()
    } else {
        file.file_type.clone()
    };

    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", file.file_name),
        ))
        .body(content))
}
