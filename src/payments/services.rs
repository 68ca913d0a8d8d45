use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    app::non_empty,
    auth::password::hash_secret,
    error::AppError,
    payments::{
        dto::PaymentRequest,
        masking::mask_account_number,
        repo::PaymentRepo,
        repo_types::{NewPayment, Payment},
    },
};

const PAYMENT_FAILED: &str = "Error processing payment";

/// Payment method for which no CVV is ever stored.
pub const UPI: &str = "UPI";

/// Records a payment instrument. The user id is not checked against the
/// users table.
#[instrument(skip_all)]
pub async fn record_payment(
    payments: &dyn PaymentRepo,
    req: PaymentRequest,
) -> Result<Payment, AppError> {
    let (Some(user_id), Some(payment_method), Some(account_number)) = (
        non_empty(req.user_id),
        non_empty(req.payment_method),
        non_empty(req.account_number),
    ) else {
        warn!("payment missing required fields");
        return Err(AppError::missing_fields());
    };

    let user_id = Uuid::parse_str(&user_id).map_err(|e| {
        AppError::internal(PAYMENT_FAILED, anyhow::anyhow!("invalid userId: {e}"))
    })?;

    let cvv_hash = match non_empty(req.cvv) {
        Some(cvv) if payment_method != UPI => Some(
            hash_secret(cvv)
                .await
                .map_err(|e| AppError::internal(PAYMENT_FAILED, e))?,
        ),
        _ => None,
    };

    let payment = payments
        .insert(NewPayment {
            user_id,
            payment_method,
            account_number: mask_account_number(&account_number),
            cvv_hash,
        })
        .await
        .map_err(|e| AppError::internal(PAYMENT_FAILED, e))?;

    info!(
        payment_id = %payment.id,
        user_id = %payment.user_id,
        method = %payment.payment_method,
        account = %payment.account_number,
        created_at = %payment.created_at,
        has_cvv = payment.cvv_hash.is_some(),
        "payment recorded"
    );
    Ok(payment)
}
