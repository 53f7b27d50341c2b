use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MeetingService;
use crate::middlewares::RequireJWT;
use crate::models::meetings::requests::{MeetingListParams, MeetingListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出会议（非管理员指定班级时要求是班级成员）
pub async fn list_meetings(
    service: &MeetingService,
    request: &HttpRequest,
    params: MeetingListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let role = RequireJWT::extract_user_role(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    let query: MeetingListQuery = params.into();

    if role != Some(UserRole::Admin) {
        match query.class_id {
            Some(class_id) => {
                match storage
                    .get_class_user_by_user_id_and_class_id(uid, class_id)
                    .await
                {
                    Ok(Some(_)) => {}
                    Ok(None) => {
                        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                            ErrorCode::NotClassMember,
                            "您不是该班级成员",
                        )));
                    }
                    Err(e) => {
                        return Ok(HttpResponse::InternalServerError().json(
                            ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                format!("查询班级成员失败: {e}"),
                            ),
                        ));
                    }
                }
            }
            None => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "请指定班级ID来查看会议列表",
                )));
            }
        }
    }

    match storage.list_meetings_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询会议列表失败: {e}"),
            )),
        ),
    }
}
