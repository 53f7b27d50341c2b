use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit, RequireJWT};
use crate::models::admissions::requests::{
    AdmissionListParams, CreateAdmissionRequest, UpdateAdmissionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AdmissionService;
use crate::utils::SafeAdmissionIdI64;

// 懒加载的全局 AdmissionService 实例
static ADMISSION_SERVICE: Lazy<AdmissionService> = Lazy::new(AdmissionService::new_lazy);

// 提交报名表单（公开）
pub async fn submit_admission(
    req: HttpRequest,
    body: web::Json<CreateAdmissionRequest>,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE
        .submit_admission(&req, body.into_inner())
        .await
}

// 列出报名（管理员）
pub async fn list_admissions(
    req: HttpRequest,
    query: web::Query<AdmissionListParams>,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE
        .list_admissions(&req, query.into_inner())
        .await
}

// 更新报名状态（管理员）
pub async fn update_admission(
    req: HttpRequest,
    path: SafeAdmissionIdI64,
    body: web::Json<UpdateAdmissionRequest>,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE
        .update_admission(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_admissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admissions")
            .service(
                web::resource("")
                    // 提交报名 - 公开表单，速率限制
                    .route(
                        web::post()
                            .to(submit_admission)
                            .wrap(RateLimit::admission_form()),
                    )
                    // 列出报名 - 仅管理员
                    .route(
                        web::get()
                            .to(list_admissions)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                            .wrap(RequireJWT),
                    ),
            )
            .service(
                web::resource("/{admission_id}")
                    // 更新报名状态 - 仅管理员
                    .route(
                        web::put()
                            .to(update_admission)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                            .wrap(RequireJWT),
                    ),
            ),
    );
}
