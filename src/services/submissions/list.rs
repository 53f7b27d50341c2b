use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::class_users::entities::ClassUserRole;
use crate::models::submissions::requests::{SubmissionListParams, SubmissionListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出提交
///
/// 权限收敛：学生只能看自己的提交，教师按作业查看自己班级的提交，
/// 管理员不受限制。
pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    params: SubmissionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let user_role = RequireJWT::extract_user_role(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    let mut query: SubmissionListQuery = params.into();

    match user_role {
        Some(UserRole::Admin) => {
            // 管理员可以查看所有提交，不需要过滤
        }
        Some(UserRole::Teacher) => {
            // 教师必须指定作业，并校验任教资格
            let assignment_id = match query.assignment_id {
                Some(id) => id,
                None => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::BadRequest,
                        "请指定作业ID来查看提交列表",
                    )));
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

            match storage
                .get_class_user_by_user_id_and_class_id(uid, assignment.class_id)
                .await
            {
                Ok(Some(cu)) if cu.role == ClassUserRole::Teacher => {}
                Ok(_) => {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::Forbidden,
                        "只能查看自己班级的提交",
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
        Some(UserRole::Student) | None => {
            // 学生只能查看自己的提交
            query.student_id = Some(uid);
        }
    }

    match storage.list_submissions_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询提交列表失败: {e}"),
            )),
        ),
    }
}
