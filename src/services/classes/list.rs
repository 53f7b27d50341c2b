use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::ClassListParams;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出班级：管理员看全部，其他用户只看自己所在的班级
pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    params: ClassListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let role = RequireJWT::extract_user_role(request);

    let result = match role {
        Some(UserRole::Admin) => storage.list_classes_with_pagination(params.into()).await,
        _ => {
            let uid = match RequireJWT::extract_user_id(request) {
                Some(id) => id,
                None => {
                    return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                        ErrorCode::Unauthorized,
                        "无法获取用户信息",
                    )));
                }
            };
            storage
                .list_user_classes_with_pagination(uid, params.into())
                .await
        }
    };

    match result {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级列表失败: {e}"),
            )),
        ),
    }
}
