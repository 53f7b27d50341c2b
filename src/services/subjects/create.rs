use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubjectService;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_required_text;

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    req: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_required_text(&req.name, "name") {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_subject(req).await {
        Ok(subject) => {
            info!("Subject {} created (id: {})", subject.name, subject.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(subject, "创建成功")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Failed to create subject: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectAlreadyExists,
                    "科目已存在",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("创建科目失败: {msg}"),
                    )),
                )
            }
        }
    }
}
