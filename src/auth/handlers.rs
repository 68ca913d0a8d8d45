use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    app::MessageResponse,
    auth::{
        dto::{LoginRequest, LoginResponse, SignupRequest},
        jwt::JwtKeys,
        services,
    },
    error::AppError,
    extractors::AppJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    services::signup(state.users.as_ref(), payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

#[instrument(skip(state, keys, payload))]
pub async fn login(
    State(state): State<AppState>,
    State(keys): State<JwtKeys>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let outcome = services::login(state.users.as_ref(), &keys, payload).await?;
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        token: outcome.token,
        user_id: outcome.user_id,
    }))
}
