use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit, RequireJWT};
use crate::models::support::requests::{CreateSupportQuestionRequest, SupportQuestionListParams};
use crate::models::users::entities::UserRole;
use crate::services::SupportService;

// 懒加载的全局 SupportService 实例
static SUPPORT_SERVICE: Lazy<SupportService> = Lazy::new(SupportService::new_lazy);

// 提交咨询问题（公开）
pub async fn submit_question(
    req: HttpRequest,
    body: web::Json<CreateSupportQuestionRequest>,
) -> ActixResult<HttpResponse> {
    SUPPORT_SERVICE
        .submit_question(&req, body.into_inner())
        .await
}

// 列出咨询问题（管理员）
pub async fn list_questions(
    req: HttpRequest,
    query: web::Query<SupportQuestionListParams>,
) -> ActixResult<HttpResponse> {
    SUPPORT_SERVICE
        .list_questions(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_support_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/support").service(
            web::resource("/questions")
                // 提交咨询 - 公开表单，速率限制
                .route(
                    web::post()
                        .to(submit_question)
                        .wrap(RateLimit::support_form()),
                )
                // 列出咨询 - 仅管理员
                .route(
                    web::get()
                        .to(list_questions)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                        .wrap(RequireJWT),
                ),
        ),
    );
}
