use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Duration, Utc};
use tracing::{error, info, warn};

use super::MeetingService;
use crate::clients::meet::{CreateEventRequest, MeetClient, MeetError};
use crate::middlewares::RequireJWT;
use crate::models::class_users::entities::ClassUserRole;
use crate::models::meetings::entities::MeetingMode;
use crate::models::meetings::requests::CreateMeetingRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::NewMeeting;
use crate::utils::validate::validate_required_text;

// 预约时间允许的时钟偏差
const SCHEDULE_SKEW_SECS: i64 = 60;

/// 创建会议
///
/// 顺序链：解析参会学生邮箱 -> 调外部会议服务创建事件 -> 写本地镜像。
/// 外部调用失败时不写任何本地记录，错误区分凭证过期（提示重新授权）
/// 与暂时故障（提示重试）。外部成功后本地写入失败会留下孤儿外部事件，
/// 目前没有对账任务。
pub async fn create_meeting(
    service: &MeetingService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateMeetingRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_required_text(&req.title, "title") {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    // 班级存在性 + 任教资格
    match storage.get_class_by_id(req.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    }

    if RequireJWT::extract_user_role(request) != Some(UserRole::Admin) {
        match storage
            .get_class_user_by_user_id_and_class_id(created_by, req.class_id)
            .await
        {
            Ok(Some(cu)) if cu.role == ClassUserRole::Teacher => {}
            Ok(_) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::ClassPermissionDenied,
                    "只有该班级的教师可以创建会议",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询班级成员失败: {e}"),
                    )),
                );
            }
        }
    }

    // 会议时间：即时会议用当前时间，预约会议要求非过去时间
    let now = Utc::now();
    let scheduled_at = match req.mode {
        MeetingMode::Instant => now,
        MeetingMode::Scheduled => match req.scheduled_at {
            Some(at) => {
                if at < now - Duration::seconds(SCHEDULE_SKEW_SECS) {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::MeetingTimeInvalid,
                        "预约时间不能是过去的时间",
                    )));
                }
                at
            }
            None => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MeetingTimeInvalid,
                    "预约会议必须指定开始时间",
                )));
            }
        },
    };

    // 解析参会人：该班级的全部学生邮箱
    let participants = match storage.list_class_student_emails(req.class_id).await {
        Ok(emails) => emails,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("解析参会学生失败: {e}"),
                )),
            );
        }
    };

    // 调用外部会议服务
    let client = match MeetClient::new() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build meet client: {}", e);
            return Ok(
                HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                    ErrorCode::MeetProviderUnavailable,
                    "会议服务暂时不可用，请稍后重试",
                )),
            );
        }
    };

    let event = match client
        .create_event(CreateEventRequest {
            title: req.title.clone(),
            start_time: scheduled_at.to_rfc3339(),
            description: req.description.clone(),
            participants,
        })
        .await
    {
        Ok(event) => event,
        // 凭证过期：提示重新授权，不写本地记录
        Err(MeetError::AuthExpired(msg)) => {
            warn!("Meet provider auth expired: {}", msg);
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::MeetAuthExpired,
                "会议服务授权已过期，请重新授权后再试",
            )));
        }
        // 暂时故障：提示重试，不写本地记录
        Err(MeetError::Unavailable(msg)) => {
            warn!("Meet provider unavailable: {}", msg);
            return Ok(
                HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                    ErrorCode::MeetProviderUnavailable,
                    "会议服务暂时不可用，请稍后重试",
                )),
            );
        }
        Err(MeetError::InvalidResponse(msg)) => {
            error!("Meet provider rejected request: {}", msg);
            return Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::MeetProviderUnavailable,
                format!("会议服务拒绝了请求: {msg}"),
            )));
        }
    };

    // 外部事件创建成功，写本地镜像
    match storage
        .create_meeting(NewMeeting {
            class_id: req.class_id,
            created_by,
            title: req.title,
            description: req.description,
            meet_link: event.meet_link,
            event_id: event.event_id,
            scheduled_at,
        })
        .await
    {
        Ok(meeting) => {
            info!(
                "Meeting {} created for class {} by {}",
                meeting.id, meeting.class_id, created_by
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(meeting, "创建会议成功")))
        }
        Err(e) => {
            // 外部事件已存在但本地写入失败，记录事件 ID 便于人工清理
            error!(
                "Meeting persisted externally but local write failed (event left orphaned): {}",
                e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("会议已在外部创建，但本地保存失败: {e}"),
                )),
            )
        }
    }
}
