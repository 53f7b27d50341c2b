use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MeetingService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 删除会议（创建者或管理员；只删本地镜像）
pub async fn delete_meeting(
    service: &MeetingService,
    request: &HttpRequest,
    meeting_id: i64,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let meeting = match storage.get_meeting_by_id(meeting_id).await {
        Ok(Some(meeting)) => meeting,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::MeetingNotFound,
                "会议不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询会议失败: {e}"),
                )),
            );
        }
    };

    let is_admin = RequireJWT::extract_user_role(request) == Some(UserRole::Admin);
    if !is_admin && meeting.created_by != user_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有会议创建者可以删除",
        )));
    }

    match storage.delete_meeting(meeting_id).await {
        Ok(true) => {
            info!("Meeting {} deleted by {}", meeting_id, user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除会议成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MeetingNotFound,
            "会议不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除会议失败: {e}"),
            )),
        ),
    }
}
