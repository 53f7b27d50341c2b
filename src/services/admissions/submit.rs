use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AdmissionService;
use crate::models::admissions::requests::CreateAdmissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_required_text};

/// 提交报名表单（公开端点，速率限制在路由层）
pub async fn submit_admission(
    service: &AdmissionService,
    request: &HttpRequest,
    req: CreateAdmissionRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_required_text(&req.student_name, "student_name") {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }
    if let Err(msg) = validate_email(&req.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }
    if let Err(msg) = validate_required_text(&req.phone, "phone") {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }
    if let Err(msg) = validate_required_text(&req.grade_applied, "grade_applied") {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_admission(req).await {
        Ok(admission) => {
            info!("Admission entry {} received", admission.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                admission,
                "报名提交成功，我们会尽快联系您",
            )))
        }
        Err(e) => {
            error!("Failed to create admission entry: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "报名提交失败，请稍后再试",
                )),
            )
        }
    }
}
