use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SupportService;
use crate::models::support::requests::SupportQuestionListParams;
use crate::models::{ApiResponse, ErrorCode};

/// 列出咨询问题（路由层已限制为管理员）
pub async fn list_questions(
    service: &SupportService,
    request: &HttpRequest,
    params: SupportQuestionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_support_questions_with_pagination(params.into())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询咨询列表失败: {e}"),
            )),
        ),
    }
}
