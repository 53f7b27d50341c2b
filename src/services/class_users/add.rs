use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::ClassUserService;
use crate::models::class_users::entities::ClassUserRole;
use crate::models::class_users::requests::AddClassUserRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 教师/管理员直接添加班级成员（路由层已限制角色）
pub async fn add_class_user(
    service: &ClassUserService,
    request: &HttpRequest,
    class_id: i64,
    req: AddClassUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
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
    };

    // 目标用户必须存在，角色要与班级角色匹配
    let target = match storage.get_user_by_id(req.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "用户不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询用户失败: {e}"),
                )),
            );
        }
    };

    if req.role == ClassUserRole::Teacher && target.role != UserRole::Teacher {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "只能将教师账号指派为班级教师",
        )));
    }

    // 查重
    if let Ok(Some(_)) = storage
        .get_class_user_by_user_id_and_class_id(req.user_id, class_id)
        .await
    {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AlreadyClassMember,
            "该用户已经是班级成员",
        )));
    }

    // 学生入班受容量限制，教师不占学生名额
    if req.role == ClassUserRole::Student && class.student_count >= class.capacity {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ClassFull,
            "班级人数已满",
        )));
    }

    match storage.join_class(req.user_id, class_id, req.role).await {
        Ok(class_user) => {
            info!("User {} added to class {}", req.user_id, class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(class_user, "添加成员成功")))
        }
        Err(e) => {
            warn!("Failed to add class user: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("添加成员失败: {e}"),
                )),
            )
        }
    }
}
