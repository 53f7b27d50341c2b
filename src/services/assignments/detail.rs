use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::responses::{
    AssignmentCreator, AssignmentDetailResponse, AssignmentStatsSummary, MySubmissionSummary,
};
use crate::models::class_users::entities::ClassUserRole;
use crate::models::files::entities::File;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 获取作业详情
///
/// 展示状态在这里统一派生；学生视角附带本人提交摘要，教师/管理员视角
/// 附带提交统计。
pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

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

    // 非管理员要求是班级成员
    let class_role = if current_user.role == UserRole::Admin {
        None
    } else {
        match storage
            .get_class_user_by_user_id_and_class_id(current_user.id, assignment.class_id)
            .await
        {
            Ok(Some(cu)) => Some(cu.role),
            Ok(None) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::NotClassMember,
                    "您不是该班级成员",
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
    };

    let is_student_view = class_role == Some(ClassUserRole::Student);

    // 学生视角：本人的有效提交
    let my_submission = if is_student_view {
        match storage
            .get_live_submission(assignment.id, current_user.id)
            .await
        {
            Ok(Some(sub)) => Some(MySubmissionSummary {
                id: sub.id,
                status: sub.status.to_string(),
                is_late: sub.is_late,
                score: sub.score,
                submitted_at: sub.submitted_at.to_rfc3339(),
            }),
            Ok(None) => None,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询提交失败: {e}"),
                    )),
                );
            }
        }
    } else {
        None
    };

    // 教师/管理员视角：提交统计
    let stats_summary = if is_student_view {
        None
    } else {
        let total_students = storage
            .count_class_students(assignment.class_id)
            .await
            .unwrap_or(0);
        let submitted_count = storage
            .count_assignment_submissions(assignment.id)
            .await
            .unwrap_or(0);
        let graded_count = storage
            .count_assignment_graded_submissions(assignment.id)
            .await
            .unwrap_or(0);
        Some(AssignmentStatsSummary {
            total_students,
            submitted_count,
            graded_count,
        })
    };

    let creator = match storage.get_user_by_id(assignment.created_by).await {
        Ok(Some(user)) => Some(AssignmentCreator {
            id: user.id,
            username: user.username,
            display_name: Some(user.profile.profile_name),
        }),
        _ => None,
    };

    let now = chrono::Utc::now();
    let effective_status = assignment.effective_status(now);
    let material_url = assignment.material.as_deref().map(File::download_url);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssignmentDetailResponse {
            assignment,
            effective_status,
            material_url,
            creator,
            my_submission,
            stats_summary,
        },
        "查询成功",
    )))
}
