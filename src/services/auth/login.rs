use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::AuthService;
use crate::models::auth::requests::LoginRequest;
use crate::models::auth::responses::LoginResponse;
use crate::models::users::entities::UserStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

pub async fn login(
    service: &AuthService,
    request: &HttpRequest,
    req: LoginRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match storage
        .get_user_by_username_or_email(req.identifier.trim())
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            // 统一返回凭证错误，避免用户名枚举
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::InvalidCredentials,
                "用户名或密码错误",
            )));
        }
        Err(e) => {
            warn!("Failed to look up user for login: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "登录失败，请稍后再试",
                )),
            );
        }
    };

    if !verify_password(&req.password, &user.password_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::InvalidCredentials,
            "用户名或密码错误",
        )));
    }

    if user.status != UserStatus::Active {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::UserDisabled,
            "账号已被停用，请联系管理员",
        )));
    }

    // remember_me 延长 refresh token 有效期
    let refresh_expiry = if req.remember_me.unwrap_or(false) {
        let config = crate::config::AppConfig::get();
        Some(chrono::Duration::days(
            config.jwt.refresh_token_remember_me_expiry,
        ))
    } else {
        None
    };

    let token_pair = match user.generate_token_pair(refresh_expiry) {
        Ok(pair) => pair,
        Err(e) => {
            warn!("Failed to generate token pair: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "登录失败，请稍后再试",
                )),
            );
        }
    };

    if let Err(e) = storage.update_last_login(user.id).await {
        // 登录时间更新失败不影响登录
        warn!("Failed to update last login for user {}: {}", user.id, e);
    }

    info!("User {} logged in", user.id);

    let cookie = JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);
    Ok(HttpResponse::Ok().cookie(cookie).json(ApiResponse::success(
        LoginResponse {
            access_token: token_pair.access_token,
            user,
        },
        "登录成功",
    )))
}
