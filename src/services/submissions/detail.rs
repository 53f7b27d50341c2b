use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::class_users::entities::ClassUserRole;
use crate::models::files::entities::File;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::responses::{
    SubmissionAssignmentInfo, SubmissionResponse, SubmissionStudent,
};
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 检查用户是否有权限查看某个提交
///
/// 提交者本人、该班级的教师和管理员可以查看。
async fn check_submission_access(
    storage: &Arc<dyn Storage>,
    current_user: &User,
    submission: &Submission,
) -> Result<(), HttpResponse> {
    if current_user.role == UserRole::Admin || submission.student_id == current_user.id {
        return Ok(());
    }

    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    match storage
        .get_class_user_by_user_id_and_class_id(current_user.id, assignment.class_id)
        .await
    {
        Ok(Some(cu)) if cu.role == ClassUserRole::Teacher => Ok(()),
        Ok(_) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::SubmissionPermissionDenied,
            "没有查看该提交的权限",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级成员失败: {e}"),
            )),
        ),
    }
}

/// 获取提交详情
pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

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

    if let Err(resp) = check_submission_access(&storage, &current_user, &submission).await {
        return Ok(resp);
    }

    // 附加提交者和作业信息
    let student = match storage.get_user_by_id(submission.student_id).await {
        Ok(Some(user)) => Some(SubmissionStudent {
            id: user.id,
            username: user.username,
            display_name: Some(user.profile.profile_name),
            avatar_url: user.profile.avatar_url,
        }),
        _ => None,
    };

    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(a)) => Some(SubmissionAssignmentInfo {
            id: a.id,
            title: a.title,
            subject: a.subject,
            points: a.points,
            due_date: a.due_date.to_rfc3339(),
        }),
        _ => None,
    };

    let attachment_urls = submission
        .attachments
        .iter()
        .map(|token| File::download_url(token))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SubmissionResponse {
            submission,
            attachment_urls,
            student,
            assignment,
        },
        "查询成功",
    )))
}
