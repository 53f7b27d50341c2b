use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::class_users::entities::ClassUserRole;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::{validate_due_time, validate_required_text};

/// 创建作业
///
/// 材料 token 在写入任何记录之前解析：token 不存在或不属于创建者时
/// 整个创建被拒绝，不会留下引用失败上传的作业记录。
pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 必填字段校验
    if let Err(msg) = validate_required_text(&req.title, "title") {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }
    if let Err(msg) = validate_required_text(&req.subject, "subject") {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }
    if let Some(points) = req.points
        && points < 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Points must not be negative",
        )));
    }
    if let Some(ref due_time) = req.due_time
        && let Err(msg) = validate_due_time(due_time)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    // 班级存在性 + 教师资格
    if let Err(resp) = check_assignment_create_permission(&storage, created_by, req.class_id, request).await {
        return Ok(resp);
    }

    // 材料 token 解析（失败则中止创建）
    if let Some(ref token) = req.material {
        match storage.get_file_by_token(token).await {
            Ok(Some(file)) => {
                if file.user_id != created_by {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::AssignmentPermissionDenied,
                        "无权使用该材料文件",
                    )));
                }
            }
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MaterialNotFound,
                    "材料文件不存在或尚未上传完成",
                )));
            }
            Err(e) => {
                error!("Failed to resolve material token: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "校验材料文件失败",
                    )),
                );
            }
        }
    }

    match storage.create_assignment(created_by, req).await {
        Ok(assignment) => {
            info!(
                "Assignment '{}' created in class {} by {}",
                assignment.title, assignment.class_id, created_by
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "创建作业成功")))
        }
        Err(e) => {
            error!("Failed to create assignment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建作业失败: {e}"),
                )),
            )
        }
    }
}

/// 权限校验：班级必须存在，创建者必须是该班级教师或管理员
async fn check_assignment_create_permission(
    storage: &Arc<dyn Storage>,
    user_id: i64,
    class_id: i64,
    request: &HttpRequest,
) -> Result<(), HttpResponse> {
    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            error!("Failed to get class {}: {}", class_id, e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询班级失败",
                )),
            );
        }
    }

    if RequireJWT::extract_user_role(request) == Some(UserRole::Admin) {
        return Ok(());
    }

    match storage
        .get_class_user_by_user_id_and_class_id(user_id, class_id)
        .await
    {
        Ok(Some(cu)) if cu.role == ClassUserRole::Teacher => Ok(()),
        Ok(_) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassPermissionDenied,
            "只有该班级的教师可以布置作业",
        ))),
        Err(e) => {
            error!("Failed to check class membership: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询班级成员失败",
                )),
            )
        }
    }
}
