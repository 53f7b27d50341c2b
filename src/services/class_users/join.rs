use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::ClassUserService;
use crate::middlewares::RequireJWT;
use crate::models::class_users::entities::ClassUserRole;
use crate::models::class_users::requests::JoinClassRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 学生通过邀请码加入班级
///
/// 入班时校验容量：班级已满则拒绝。并发加入的竞争窗口由唯一索引兜底
/// （同一用户不会重复入班），容量在极端并发下可能超出一人，可接受。
pub async fn join_class(
    service: &ClassUserService,
    request: &HttpRequest,
    req: JoinClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    let class = match storage.get_class_by_code(req.invite_code.trim()).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::InviteCodeInvalid,
                "邀请码无效",
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

    // 已是成员则直接拒绝
    match storage
        .get_class_user_by_user_id_and_class_id(uid, class.id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyClassMember,
                "您已经是该班级成员",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级成员失败: {e}"),
                )),
            );
        }
    }

    // 容量检查
    if class.student_count >= class.capacity {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ClassFull,
            "班级人数已满",
        )));
    }

    match storage
        .join_class(uid, class.id, ClassUserRole::Student)
        .await
    {
        Ok(class_user) => {
            info!("User {} joined class {}", uid, class.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(class_user, "加入班级成功")))
        }
        Err(e) => {
            warn!("Failed to join class: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("加入班级失败: {e}"),
                )),
            )
        }
    }
}
