//! Login handler

use axum::{extract::State, http::header, response::IntoResponse, Json};
use validator::Validate;

use infra_db::{DatabaseError, StaffRepository};

use crate::auth;
use crate::dto::staff::{LoginBody, LoginResponse, LoginUser};
use crate::error::ApiError;
use crate::AppState;

/// Authenticates a staff member and opens a session.
///
/// The password comparison is clear-text equality against the stored value;
/// both invalid usernames and wrong passwords answer the same 401 so the
/// response does not reveal which one failed.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse, ApiError> {
    body.validate()?;

    let repository = StaffRepository::new(state.pool.clone());
    let staff = match repository.find_by_username(&body.username).await {
        Ok(staff) => staff,
        Err(DatabaseError::NotFound(_)) => return Err(ApiError::Unauthorized),
        Err(other) => return Err(other.into()),
    };

    if !staff.verify_password(&body.password) {
        tracing::warn!(username = %body.username, "failed login attempt");
        return Err(ApiError::Unauthorized);
    }

    let token = auth::create_token(
        &staff.username,
        staff.role,
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )
    .map_err(|e| ApiError::Internal(e.to_string()))?;
    let cookie = auth::session_cookie(&token, state.config.jwt_expiration_secs);

    tracing::info!(username = %staff.username, "staff logged in");

    let response = LoginResponse {
        success: true,
        user: LoginUser {
            id: staff.id,
            username: staff.username,
            role: staff.role,
        },
    };
    Ok(([(header::SET_COOKIE, cookie)], Json(response)))
}
