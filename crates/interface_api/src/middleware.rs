//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::{self, Claims};
use crate::AppState;

/// Paths reachable without a staff session.
///
/// The guest-facing order page reads the menu, places orders, and shows the
/// live bill from the guest's own device, with no staff login involved.
fn is_public(method: &Method, path: &str) -> bool {
    // Nested routers see the path with the mount prefix stripped; accept
    // both forms so the check does not depend on where the layer sits.
    let path = path.strip_prefix("/api/v1").unwrap_or(path);

    if *method == Method::GET {
        path == "/menu"
            || path
                .strip_prefix("/menu/")
                .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
            || (path.starts_with("/guests/") && path.ends_with("/bill"))
    } else if *method == Method::POST {
        path == "/orders"
    } else {
        false
    }
}

fn extract_token(request: &Request<Body>) -> Option<String> {
    let headers = request.headers();
    if let Some(value) = headers.get(header::AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }
    headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(auth::token_from_cookie_header)
        .map(str::to_string)
}

/// Session authentication middleware
///
/// Validates the session token (cookie or bearer) and attaches the claims
/// to the request. Guest-facing routes pass through unauthenticated.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if is_public(request.method(), request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let Some(token) = extract_token(&request) else {
        warn!(path = %request.uri().path(), "missing session token");
        return Err(StatusCode::UNAUTHORIZED);
    };

    match auth::validate_token(&token, &state.config.jwt_secret) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(e) => {
            warn!("session validation failed: {:?}", e);
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

/// Admin gate for staff management and destructive operations.
///
/// Runs inside `auth_middleware`, so the claims are already attached.
pub async fn require_admin(request: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let is_admin = request
        .extensions()
        .get::<Claims>()
        .is_some_and(Claims::is_admin);
    if !is_admin {
        warn!(path = %request.uri().path(), "admin role required");
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(next.run(request).await)
}

/// Audit logging middleware
///
/// Logs every API request with its caller, status, and duration.
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user = request
        .extensions()
        .get::<Claims>()
        .map(|c| c.sub.clone())
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();
    let response = next.run(request).await;
    let duration = Utc::now() - start;

    info!(
        method = %method,
        uri = %uri,
        user = %user,
        status = %response.status().as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
