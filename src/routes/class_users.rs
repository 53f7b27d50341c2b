use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::class_users::entities::ClassUserRole;
use crate::models::class_users::requests::{
    AddClassUserRequest, ClassUserListParams, JoinClassRequest,
};
use crate::services::ClassUserService;
use crate::utils::{SafeClassIdI64, SafeUserIdI64};

// 懒加载的全局 ClassUserService 实例
static CLASS_USER_SERVICE: Lazy<ClassUserService> = Lazy::new(ClassUserService::new_lazy);

// 通过邀请码加入班级
pub async fn join_class(
    req: HttpRequest,
    body: web::Json<JoinClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_USER_SERVICE.join_class(&req, body.into_inner()).await
}

// 列出班级成员
pub async fn list_class_users(
    req: HttpRequest,
    path: SafeClassIdI64,
    query: web::Query<ClassUserListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_USER_SERVICE
        .list_class_users(&req, path.0, query.into_inner())
        .await
}

// 添加班级成员
pub async fn add_class_user(
    req: HttpRequest,
    path: SafeClassIdI64,
    body: web::Json<AddClassUserRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_USER_SERVICE
        .add_class_user(&req, path.0, body.into_inner())
        .await
}

// 移出班级成员
pub async fn remove_class_user(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    user_id: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_USER_SERVICE
        .remove_class_user(&req, class_id.0, user_id.0)
        .await
}

// 配置路由
// 注意：必须在 classes 路由之前注册，保证 /join 和 /{class_id}/students
// 不会被 /{class_id} 资源抢先匹配
pub fn configure_class_users_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/classes/join")
            .wrap(RequireJWT)
            // 通过邀请码加入班级 - 所有登录用户
            .route(web::post().to(join_class)),
    );
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/students")
            .wrap(RequireJWT)
            .service(
                web::resource("")
                    // 列出成员 - 班级成员可见
                    .route(
                        web::get().to(list_class_users).wrap(
                            middlewares::RequireClassRole::new_any(&[
                                &ClassUserRole::Teacher,
                                &ClassUserRole::Student,
                            ]),
                        ),
                    )
                    // 添加成员 - 该班级教师（管理员直接放行）
                    .route(
                        web::post()
                            .to(add_class_user)
                            .wrap(middlewares::RequireClassRole::new(&ClassUserRole::Teacher)),
                    ),
            )
            // 移出成员 - 业务层校验（教师/管理员/本人退出）
            .service(
                web::resource("/{user_id}").route(web::delete().to(remove_class_user)),
            ),
    );
}
