use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SupportService;
use crate::models::support::requests::CreateSupportQuestionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_required_text};

/// 提交咨询问题（公开端点，速率限制在路由层）
pub async fn submit_question(
    service: &SupportService,
    request: &HttpRequest,
    req: CreateSupportQuestionRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_required_text(&req.name, "name") {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }
    if let Err(msg) = validate_email(&req.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }
    if let Err(msg) = validate_required_text(&req.question, "question") {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_support_question(req).await {
        Ok(question) => {
            info!("Support question {} received", question.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(question, "咨询提交成功")))
        }
        Err(e) => {
            error!("Failed to create support question: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "咨询提交失败，请稍后再试",
                )),
            )
        }
    }
}
