use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::meetings::requests::{CreateMeetingRequest, MeetingListParams};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::MeetingService;
use crate::utils::SafeMeetingIdI64;

// 懒加载的全局 MeetingService 实例
static MEETING_SERVICE: Lazy<MeetingService> = Lazy::new(MeetingService::new_lazy);

// 创建会议
pub async fn create_meeting(
    req: HttpRequest,
    body: web::Json<CreateMeetingRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match middlewares::RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    MEETING_SERVICE
        .create_meeting(&req, user_id, body.into_inner())
        .await
}

// 列出会议
pub async fn list_meetings(
    req: HttpRequest,
    query: web::Query<MeetingListParams>,
) -> ActixResult<HttpResponse> {
    MEETING_SERVICE.list_meetings(&req, query.into_inner()).await
}

// 删除会议
pub async fn delete_meeting(
    req: HttpRequest,
    path: SafeMeetingIdI64,
) -> ActixResult<HttpResponse> {
    let user_id = match middlewares::RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    MEETING_SERVICE.delete_meeting(&req, path.0, user_id).await
}

// 配置路由
pub fn configure_meetings_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/meetings")
            .wrap(RequireJWT)
            .service(
                web::resource("")
                    // 列出会议 - 所有登录用户（业务层校验班级成员资格）
                    .route(web::get().to(list_meetings))
                    // 创建会议 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_meeting)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{meeting_id}")
                    // 删除会议 - 创建者或管理员（业务层校验）
                    .route(web::delete().to(delete_meeting)),
            ),
    );
}
