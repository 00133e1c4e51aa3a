use axum::{extract::State, http::StatusCode, Extension, Json};
use validator::Validate;

use crate::auth::{
    jwt::create_token,
    middleware::AuthUser,
    password::{hash_password, verify_password},
};
use crate::dto::{LoginRequest, LoginResponse, MeResponse, RegisterRequest, RegisterResponse};
use crate::error::{AppError, AppResult};
use crate::models::user::{User, UserSummary};
use crate::AppState;

const INVALID_LOGIN: &str = "Invalid username or password!";

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub async fn register(
    State(state): State<AppState>,
    body: Option<Json<RegisterRequest>>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (Some(username), Some(email), Some(password)) = (
        non_empty(body.username),
        non_empty(body.email),
        non_empty(body.password),
    ) else {
        return Err(AppError::BadRequest(
            "Username, email, and password are required!".into(),
        ));
    };

    let pwd_hash = hash_password(&password)?;
    let user = User::new(username, email, pwd_hash);
    let summary = UserSummary::from(&user);

    state.store.create_user(user).await?;
    tracing::info!(user_id = %summary.id, username = %summary.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully!".into(),
            user: summary,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    body: Option<Json<LoginRequest>>,
) -> AppResult<Json<LoginResponse>> {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    let (Some(username), Some(password)) = (non_empty(body.username), non_empty(body.password))
    else {
        return Err(AppError::BadRequest(
            "Username and password are required!".into(),
        ));
    };

    let user = state
        .store
        .find_user(&username)
        .await?
        .ok_or_else(|| AppError::InvalidCredentials(INVALID_LOGIN.into()))?;

    if !verify_password(&password, &user.password_hash) {
        tracing::info!(username = %username, "Login rejected");
        return Err(AppError::InvalidCredentials(INVALID_LOGIN.into()));
    }

    let token = create_token(user.id, &user.username, &state.config)?;
    Ok(Json(LoginResponse {
        message: "Login successful!".into(),
        token,
        user: UserSummary::from(&user),
    }))
}

pub async fn me(Extension(auth_user): Extension<AuthUser>) -> Json<MeResponse> {
    Json(MeResponse {
        id: auth_user.id,
        username: auth_user.username,
    })
}
