use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::{AssignmentListParams, AssignmentListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出作业
///
/// 可见性按角色收敛：
/// - 管理员：不加限制
/// - 教师：默认只看自己创建的作业；指定 class_id 时校验任教资格
/// - 学生：限定到本人所在的班级（成员关系查询，不做展开写入），并附带
///   本人提交摘要
pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    params: AssignmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let role = RequireJWT::extract_user_role(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    let mut query: AssignmentListQuery = params.into();
    let mut current_user_id = None;

    match role {
        Some(UserRole::Admin) => {
            // 管理员可以查看所有作业
        }
        Some(UserRole::Teacher) => {
            if let Some(class_id) = query.class_id {
                // 指定班级时校验任教资格
                match storage
                    .get_class_user_by_user_id_and_class_id(uid, class_id)
                    .await
                {
                    Ok(Some(_)) => {}
                    Ok(None) => {
                        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                            ErrorCode::NotClassMember,
                            "只能查看自己任教班级的作业",
                        )));
                    }
                    Err(e) => {
                        return Ok(HttpResponse::InternalServerError().json(
                            ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                format!("查询班级成员失败: {e}"),
                            ),
                        ));
                    }
                }
            } else {
                query.created_by = Some(uid);
            }
        }
        Some(UserRole::Student) | None => {
            // 学生限定到本人所在的班级
            let class_ids = match storage.list_user_class_ids(uid).await {
                Ok(ids) => ids,
                Err(e) => {
                    return Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询用户班级失败: {e}"),
                        )),
                    );
                }
            };

            if let Some(class_id) = query.class_id
                && !class_ids.contains(&class_id)
            {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::NotClassMember,
                    "您不是该班级成员",
                )));
            }

            query.class_ids = Some(class_ids);
            query.include_stats = None; // 统计信息仅教师/管理员可见
            current_user_id = Some(uid);
        }
    }

    match storage
        .list_assignments_with_pagination(query, current_user_id)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询作业列表失败: {e}"),
            )),
        ),
    }
}
