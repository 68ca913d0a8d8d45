use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    app::non_empty,
    auth::{
        dto::{LoginRequest, SignupRequest},
        jwt::JwtKeys,
        password::{hash_secret, verify_secret},
        repo::UserRepo,
        repo_types::{NewUser, User},
    },
    error::AppError,
    store::StoreError,
};

const SIGNUP_FAILED: &str = "Error creating user";
const LOGIN_FAILED: &str = "Error logging in";

/// Token issued by a successful login.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub user_id: Uuid,
}

/// Creates an account. The email check and the write are one atomic insert,
/// so a concurrent duplicate loses on the datastore's unique constraint.
#[instrument(skip_all)]
pub async fn signup(users: &dyn UserRepo, req: SignupRequest) -> Result<User, AppError> {
    let (Some(email), Some(password)) = (non_empty(req.email), non_empty(req.password)) else {
        warn!("signup missing email or password");
        return Err(AppError::missing_fields());
    };

    let password_hash = hash_secret(password)
        .await
        .map_err(|e| AppError::internal(SIGNUP_FAILED, e))?;

    let new_user = NewUser {
        first_name: req.first_name,
        last_name: req.last_name,
        email,
        password_hash,
    };

    match users.insert_if_absent(new_user).await {
        Ok(user) => {
            info!(user_id = %user.id, email = %user.email, "user registered");
            Ok(user)
        }
        Err(StoreError::Conflict(_)) => {
            warn!("email already registered");
            Err(AppError::Conflict("User already exists".into()))
        }
        Err(e) => Err(AppError::internal(SIGNUP_FAILED, e)),
    }
}

#[instrument(skip_all)]
pub async fn login(
    users: &dyn UserRepo,
    keys: &JwtKeys,
    req: LoginRequest,
) -> Result<LoginOutcome, AppError> {
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let user = users
        .find_by_email(&email)
        .await
        .map_err(|e| AppError::internal(LOGIN_FAILED, e))?
        .ok_or_else(|| {
            warn!(%email, "login unknown email");
            AppError::NotFound("User not found".into())
        })?;

    // A comparison error is reported exactly like a wrong password.
    let matches = match verify_secret(password, user.password_hash.clone()).await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, user_id = %user.id, "password comparison failed");
            false
        }
    };
    if !matches {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let token = keys
        .sign(user.id)
        .map_err(|e| AppError::internal(LOGIN_FAILED, e))?;

    info!(user_id = %user.id, "user logged in");
    Ok(LoginOutcome {
        token,
        user_id: user.id,
    })
}
