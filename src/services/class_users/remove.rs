use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassUserService;
use crate::middlewares::RequireJWT;
use crate::models::class_users::entities::ClassUserRole;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 移出成员：管理员和班级教师可移出任何人，学生只能退出自己
pub async fn remove_class_user(
    service: &ClassUserService,
    request: &HttpRequest,
    class_id: i64,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 权限：管理员放行；本人退出放行；否则要求是该班级教师
    if current.role != UserRole::Admin && current.id != user_id {
        match storage
            .get_class_user_by_user_id_and_class_id(current.id, class_id)
            .await
        {
            Ok(Some(cu)) if cu.role == ClassUserRole::Teacher => {}
            Ok(_) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::ClassPermissionDenied,
                    "没有移出该成员的权限",
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

    match storage.leave_class(user_id, class_id).await {
        Ok(true) => {
            info!("User {} removed from class {}", user_id, class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("已移出班级")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotClassMember,
            "该用户不是班级成员",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("移出班级失败: {e}"),
            )),
        ),
    }
}
