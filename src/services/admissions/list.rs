use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdmissionService;
use crate::models::admissions::requests::AdmissionListParams;
use crate::models::{ApiResponse, ErrorCode};

/// 列出报名记录（路由层已限制为管理员）
pub async fn list_admissions(
    service: &AdmissionService,
    request: &HttpRequest,
    params: AdmissionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_admissions_with_pagination(params.into()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询报名列表失败: {e}"),
            )),
        ),
    }
}
