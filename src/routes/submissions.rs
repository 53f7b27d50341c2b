use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::submissions::requests::{
    CreateSubmissionRequest, GradeSubmissionRequest, SubmissionListParams,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::SubmissionService;
use crate::utils::{SafeAssignmentIdI64, SafeSubmissionIdI64};

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 提交/重交作业
pub async fn submit(
    req: HttpRequest,
    body: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match middlewares::RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    SUBMISSION_SERVICE
        .submit(&req, user_id, body.into_inner())
        .await
}

// 列出提交
pub async fn list_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListParams>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner())
        .await
}

// 获取提交详情
pub async fn get_submission(
    req: HttpRequest,
    path: SafeSubmissionIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.get_submission(&req, path.0).await
}

// 评分
pub async fn grade_submission(
    req: HttpRequest,
    path: SafeSubmissionIdI64,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, path.0, body.into_inner())
        .await
}

// 获取本人对某作业的有效提交
pub async fn get_my_submission(
    req: HttpRequest,
    path: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.get_my_submission(&req, path.0).await
}

// 配置路由
// 注意：/api/v1/assignments/{assignment_id}/my-submission 必须在
// assignments 路由之前注册
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/assignments/{assignment_id}/my-submission")
            .wrap(RequireJWT)
            .route(web::get().to(get_my_submission)),
    );
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(RequireJWT)
            .service(
                web::resource("")
                    // 提交作业 - 所有登录用户（业务层校验学生身份和班级成员资格）
                    .route(web::post().to(submit))
                    // 列出提交 - 所有登录用户（业务层按角色收敛范围）
                    .route(web::get().to(list_submissions)),
            )
            .service(
                web::resource("/{submission_id}")
                    // 获取提交详情 - 本人/班级教师/管理员（业务层校验）
                    .route(web::get().to(get_submission)),
            )
            .service(
                web::resource("/{submission_id}/grade")
                    // 评分 - 仅教师和管理员（业务层校验任教资格和分数范围）
                    .route(
                        web::put()
                            .to(grade_submission)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
