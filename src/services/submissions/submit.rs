use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use crate::models::class_users::entities::ClassUserRole;
use crate::models::submissions::entities::{IntakeDecision, decide_intake};
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::NewSubmission;
use crate::utils::validate::validate_required_text;

/// 提交/重交作业
///
/// 同一 (作业, 学生) 组合最多一条有效提交：首交新建，重交原地覆盖，
/// 已评分后拒绝重交（服务端硬约束，不依赖前端隐藏按钮）。截止后仍可
/// 提交，但标记 is_late。
pub async fn submit(
    service: &SubmissionService,
    request: &HttpRequest,
    student_id: i64,
    req: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 内容必填
    if let Err(msg) = validate_required_text(&req.content, "content") {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    // 作业必须存在
    let assignment = match storage.get_assignment_by_id(req.assignment_id).await {
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

    // 提交者必须是该班级的学生
    match storage
        .get_class_user_by_user_id_and_class_id(student_id, assignment.class_id)
        .await
    {
        Ok(Some(cu)) if cu.role == ClassUserRole::Student => {}
        Ok(_) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::SubmissionPermissionDenied,
                "只有该班级的学生可以提交作业",
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

    // 附件 token 解析（失败则中止，不写任何记录）
    let attachments = req.attachments.unwrap_or_default();
    for token in &attachments {
        match storage.get_file_by_token(token).await {
            Ok(Some(file)) => {
                if file.user_id != student_id {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::SubmissionPermissionDenied,
                        format!("无权使用附件: {token}"),
                    )));
                }
            }
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileNotFound,
                    format!("附件不存在或尚未上传完成: {token}"),
                )));
            }
            Err(e) => {
                error!("Failed to resolve attachment token: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "校验附件失败",
                    )),
                );
            }
        }
    }

    // 受理决策
    let existing = match storage
        .get_live_submission(assignment.id, student_id)
        .await
    {
        Ok(existing) => existing,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询已有提交失败: {e}"),
                )),
            );
        }
    };

    let now = chrono::Utc::now();
    let new_submission = NewSubmission {
        assignment_id: assignment.id,
        student_id,
        content: req.content,
        attachments,
        is_late: now > assignment.due_date,
    };

    match decide_intake(existing.as_ref()) {
        IntakeDecision::Create => match storage.create_submission(new_submission).await {
            Ok(submission) => {
                info!(
                    "Submission created for assignment {} by student {}",
                    assignment.id, student_id
                );
                Ok(HttpResponse::Created().json(ApiResponse::success(submission, "提交成功")))
            }
            Err(e) => {
                error!("Failed to create submission: {}", e);
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("提交失败: {e}"),
                    )),
                )
            }
        },
        IntakeDecision::Overwrite { submission_id } => {
            match storage
                .overwrite_submission(submission_id, new_submission)
                .await
            {
                Ok(Some(submission)) => {
                    info!(
                        "Submission {} overwritten for assignment {} by student {}",
                        submission_id, assignment.id, student_id
                    );
                    Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "重新提交成功")))
                }
                Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::SubmissionNotFound,
                    "提交不存在",
                ))),
                Err(e) => {
                    error!("Failed to overwrite submission: {}", e);
                    Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("重新提交失败: {e}"),
                        )),
                    )
                }
            }
        }
        IntakeDecision::RejectGraded => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::SubmissionAlreadyGraded,
                "该作业已评分，无法重新提交",
            ),
        )),
    }
}
