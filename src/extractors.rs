use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` body extractor whose rejections render as `AppError`, so malformed
/// bodies get the same `{ "message": ... }` shape as every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
