use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::class_users::entities::ClassUserRole;
use crate::models::classes::requests::{ClassListParams, CreateClassRequest, UpdateClassRequest};
use crate::models::users::entities::UserRole;
use crate::services::ClassService;
use crate::utils::SafeClassIdI64;

// 懒加载的全局 ClassService 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// 列出班级
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req, query.into_inner()).await
}

// 创建班级
pub async fn create_class(
    req: HttpRequest,
    body: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.create_class(&req, body.into_inner()).await
}

// 获取班级详情
pub async fn get_class(req: HttpRequest, path: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, path.0).await
}

// 更新班级
pub async fn update_class(
    req: HttpRequest,
    path: SafeClassIdI64,
    body: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, path.0, body.into_inner())
        .await
}

// 删除班级
pub async fn delete_class(req: HttpRequest, path: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, path.0).await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(RequireJWT)
            .service(
                web::resource("")
                    // 列出班级 - 所有登录用户可访问（业务层按角色过滤）
                    .route(web::get().to(list_classes))
                    // 创建班级 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_class)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{class_id}")
                    // 获取班级详情 - 所有登录用户可访问（业务层验证班级成员资格）
                    .route(web::get().to(get_class))
                    // 更新班级 - 该班级教师（管理员直接放行）
                    .route(
                        web::put().to(update_class).wrap(
                            middlewares::RequireClassRole::new(&ClassUserRole::Teacher),
                        ),
                    )
                    // 删除班级 - 仅管理员
                    .route(
                        web::delete()
                            .to(delete_class)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
