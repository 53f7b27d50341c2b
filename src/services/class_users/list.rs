use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassUserService;
use crate::models::class_users::requests::ClassUserListParams;
use crate::models::{ApiResponse, ErrorCode};

/// 列出班级成员（路由层已通过 RequireClassRole 校验成员资格）
pub async fn list_class_users(
    service: &ClassUserService,
    request: &HttpRequest,
    class_id: i64,
    params: ClassUserListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_class_users_with_pagination(class_id, params.into())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级成员失败: {e}"),
            )),
        ),
    }
}
