use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    app::MessageResponse,
    error::AppError,
    extractors::AppJson,
    payments::{dto::PaymentRequest, services},
    state::AppState,
};

pub fn payment_routes() -> Router<AppState> {
    Router::new().route("/payment", post(create_payment))
}

/// POST /payment. The payload carries a raw CVV and is never logged.
#[instrument(skip(state, payload))]
pub async fn create_payment(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PaymentRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    services::record_payment(state.payments.as_ref(), payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Payment successful")),
    ))
}
