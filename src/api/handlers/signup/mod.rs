//! User signup endpoint.
//!
//! The pipeline per request: validate the payload, look up the normalized
//! email, hash the credential, insert the account, then trigger the
//! one-time-passcode dispatch. Validation always precedes the store lookup,
//! the lookup precedes hashing, and the unique index on `accounts.email` is
//! the authority when two signups race.

pub mod hasher;
pub mod otp;
pub mod state;
pub mod store;
pub mod types;

pub use hasher::{BcryptHasher, PasswordHasher};
pub use otp::{HttpOtpDispatcher, LogOtpDispatcher, OtpDispatcher};
pub use state::{SignupConfig, SignupState};
pub use store::{Account, CreateOutcome, NewAccount, PgUserStore, UserStore};
pub use types::{ErrorResponse, RegistrationRequest, SignupResponse};

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::{normalize_email, valid_email, valid_name, valid_password};

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = RegistrationRequest,
    responses(
        (status = 200, description = "Registration successful", body = SignupResponse),
        (status = 400, description = "Invalid payload or user already exists", body = ErrorResponse),
        (status = 500, description = "Registration failed", body = String)
    ),
    tag = "auth"
)]
// axum handler for signup
pub async fn signup(
    state: Extension<Arc<SignupState>>,
    payload: Option<Json<RegistrationRequest>>,
) -> impl IntoResponse {
    let request: RegistrationRequest = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    // SecretString keeps the raw password out of the debug output
    debug!("registration request: {:?}", request);

    let email = normalize_email(&request.email);
    if !valid_email(&email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    let password = request.password.expose_secret();
    if !valid_password(password, state.config().min_password_length()) {
        return (StatusCode::BAD_REQUEST, "Invalid password".to_string()).into_response();
    }

    let name = request.name.trim();
    if !valid_name(name) {
        return (StatusCode::BAD_REQUEST, "Invalid name".to_string()).into_response();
    }

    // Fast path only; the unique index settles concurrent signups.
    match state.store().find_by_email(&email).await {
        Ok(Some(_)) => return duplicate_user_response(),
        Ok(None) => {}
        Err(err) => {
            error!("Failed to lookup account: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Registration failed".to_string(),
            )
                .into_response();
        }
    }

    let password = match state.hasher().hash(password, state.config().bcrypt_cost()) {
        Ok(hashed) => hashed,
        Err(err) => {
            error!("Failed to hash password: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Registration failed".to_string(),
            )
                .into_response();
        }
    };

    let account = NewAccount {
        email,
        password,
        name: name.to_string(),
    };

    let created = match state.store().create(account).await {
        Ok(CreateOutcome::Created(account)) => account,
        Ok(CreateOutcome::DuplicateEmail) => return duplicate_user_response(),
        Err(err) => {
            error!("Failed to insert account: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Registration failed".to_string(),
            )
                .into_response();
        }
    };

    // Best-effort: a dispatch failure never rolls back the created account.
    if let Err(err) = state.otp().send_otp(&created.email).await {
        warn!("Failed to dispatch OTP for {}: {err}", created.email);
    }

    (StatusCode::OK, Json(SignupResponse { user: created })).into_response()
}

fn duplicate_user_response() -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "User already exists".to_string(),
        }),
    )
        .into_response()
}
