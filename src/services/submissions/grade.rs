use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::class_users::entities::ClassUserRole;
use crate::models::submissions::entities::validate_score;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 评分
///
/// 分数范围服务端硬校验：作业定义了满分时要求 0 <= score <= points。
/// 评分是一次原子写入，写入后提交进入终态 graded；教师可以再次评分
/// （原地更新分数），但学生不能再重交。
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 提交必须存在
    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(sub)) => sub,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    // 获取作业（用于范围校验和权限判断）
    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
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

    // 权限：管理员或该班级的教师
    if current_user.role != UserRole::Admin
        && let Err(resp) =
            check_class_teacher(&storage, current_user.id, assignment.class_id).await
    {
        return Ok(resp);
    }

    // 分数范围硬校验
    if let Err(msg) = validate_score(req.score, assignment.points) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeOutOfRange, msg)));
    }

    match storage
        .grade_submission(submission_id, current_user.id, req.score, req.feedback)
        .await
    {
        Ok(Some(graded)) => {
            info!(
                "Submission {} graded {} by {}",
                submission_id, req.score, current_user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(graded, "评分成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => {
            error!("Failed to grade submission {}: {}", submission_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("评分失败: {e}"),
                )),
            )
        }
    }
}

/// 校验用户是该班级的教师
async fn check_class_teacher(
    storage: &Arc<dyn Storage>,
    user_id: i64,
    class_id: i64,
) -> Result<(), HttpResponse> {
    match storage
        .get_class_user_by_user_id_and_class_id(user_id, class_id)
        .await
    {
        Ok(Some(cu)) if cu.role == ClassUserRole::Teacher => Ok(()),
        Ok(_) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassPermissionDenied,
            "只有该班级的教师可以评分",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级成员失败: {e}"),
            )),
        ),
    }
}
