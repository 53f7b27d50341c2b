use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新班级（路由层已限制为班级教师或管理员）
pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    req: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    if let Some(capacity) = req.capacity
        && capacity <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Capacity must be positive",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_class(class_id, req).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(class, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "班级不存在",
        ))),
        Err(e) => {
            error!("Failed to update class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新班级失败: {e}"),
                )),
            )
        }
    }
}
