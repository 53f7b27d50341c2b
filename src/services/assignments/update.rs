use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_due_time;

/// 更新作业（补丁语义）
///
/// 只有作业的创建教师（或管理员）可以编辑；截止时间随之可变。请求里
/// 没有出现的字段保持原值，两个教师会话并发编辑时后写覆盖。
pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    req: UpdateAssignmentRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "没有需要更新的字段",
        )));
    }

    // 字段校验
    if let Some(ref title) = req.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "title must not be empty",
        )));
    }
    if let Some(ref subject) = req.subject
        && subject.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "subject must not be empty",
        )));
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

    // 所有权校验
    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    let is_admin = RequireJWT::extract_user_role(request) == Some(UserRole::Admin);
    if !is_admin && assignment.created_by != user_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AssignmentPermissionDenied,
            "只有布置该作业的教师可以编辑",
        )));
    }

    // 新材料 token 先解析再落库；不带 material 的请求不会动已有材料
    if let Some(ref token) = req.material {
        match storage.get_file_by_token(token).await {
            Ok(Some(file)) => {
                if !is_admin && file.user_id != user_id {
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

    match storage.update_assignment(assignment_id, req).await {
        Ok(Some(updated)) => {
            info!("Assignment {} updated by {}", assignment_id, user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "更新作业成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "作业不存在",
        ))),
        Err(e) => {
            error!("Failed to update assignment {}: {}", assignment_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新作业失败: {e}"),
                )),
            )
        }
    }
}
