use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use ts_rs::TS;

use crate::models::{ApiResponse, AppStartTime};

/// 系统状态响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemStatus {
    pub name: &'static str,
    pub version: &'static str,
    pub uptime_seconds: i64,
}

// 系统状态（存活探针 + 运行时长）
pub async fn get_system_status(
    start_time: web::Data<AppStartTime>,
) -> ActixResult<HttpResponse> {
    let uptime_seconds = chrono::Utc::now()
        .signed_duration_since(start_time.start_datetime)
        .num_seconds();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SystemStatus {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds,
        },
        "ok",
    )))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .service(web::resource("/status").route(web::get().to(get_system_status))),
    );
}
