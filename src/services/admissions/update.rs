use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AdmissionService;
use crate::models::admissions::requests::UpdateAdmissionRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新报名状态（路由层已限制为管理员）
pub async fn update_admission(
    service: &AdmissionService,
    request: &HttpRequest,
    admission_id: i64,
    req: UpdateAdmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .update_admission_status(admission_id, req.status)
        .await
    {
        Ok(Some(admission)) => {
            info!("Admission {} status -> {}", admission_id, admission.status);
            Ok(HttpResponse::Ok().json(ApiResponse::success(admission, "更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AdmissionNotFound,
            "报名记录不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新报名状态失败: {e}"),
            )),
        ),
    }
}
