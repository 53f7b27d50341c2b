use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::debug;

use super::AuthService;
use crate::cache::ObjectCache;
use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

pub async fn logout(_service: &AuthService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    // 使缓存中的 token -> user 映射失效
    if let Some(token) = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        && let Some(cache) = request.app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
    {
        cache.get_ref().remove(&format!("user:{token}")).await;
        debug!("Invalidated cached session for logout");
    }

    // 清除 refresh token cookie
    let cookie = JwtUtils::create_empty_refresh_token_cookie();
    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::success_empty("已退出登录")))
}
