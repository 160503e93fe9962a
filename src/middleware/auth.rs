// ABOUTME: Bearer-token authentication helpers for route handlers
// ABOUTME: Required and optional identity extraction from the Authorization header
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use http::header::AUTHORIZATION;
use http::HeaderMap;
use oceansafe_core::errors::{AppError, AppResult};
use tracing::Span;
use uuid::Uuid;

use crate::auth::AuthManager;
use crate::constants::http_headers::BEARER_PREFIX;

/// Identity established from a valid token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// User id from the token subject
    pub user_id: Uuid,
    /// Email from the token
    pub email: String,
}

/// Raw Authorization header value, if present
fn authorization_header(headers: &HeaderMap) -> AppResult<Option<&str>> {
    headers
        .get(AUTHORIZATION)
        .map(|value| {
            value
                .to_str()
                .map_err(|_| AppError::auth_invalid("Authorization header is not valid text"))
        })
        .transpose()
}

/// Validate a `Bearer` header value
fn authenticate_header(auth: &AuthManager, header: &str) -> AppResult<AuthenticatedUser> {
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::auth_invalid("Authorization header must be a Bearer token"))?;

    let claims = auth.validate_token(token)?;
    let user = AuthenticatedUser {
        user_id: claims.user_id()?,
        email: claims.email,
    };
    Span::current().record("user_id", user.user_id.to_string());
    Ok(user)
}

/// Identity for endpoints that require it
///
/// # Errors
///
/// Returns `AuthRequired` with no header, `AuthExpired` for an expired token
/// and `AuthInvalid` for any other bad token
pub fn require_user(headers: &HeaderMap, auth: &AuthManager) -> AppResult<AuthenticatedUser> {
    let header = authorization_header(headers)?.ok_or_else(AppError::auth_required)?;
    authenticate_header(auth, header)
}

/// Identity for endpoints that work anonymously
///
/// A header that is present must still be valid.
///
/// # Errors
///
/// Returns `AuthExpired` or `AuthInvalid` when a header is sent but does not validate
pub fn optional_user(
    headers: &HeaderMap,
    auth: &AuthManager,
) -> AppResult<Option<AuthenticatedUser>> {
    authorization_header(headers)?
        .map(|header| authenticate_header(auth, header))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use http::HeaderValue;
    use oceansafe_core::errors::ErrorCode;
    use oceansafe_core::models::User;

    fn auth() -> AuthManager {
        AuthManager::new(b"middleware-secret", 1, 4)
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header() {
        let err = require_user(&HeaderMap::new(), &auth()).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthRequired);
        assert!(optional_user(&HeaderMap::new(), &auth()).unwrap().is_none());
    }

    #[test]
    fn test_wrong_scheme() {
        let err = require_user(&headers_with("Basic abc"), &auth()).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthInvalid);
    }

    #[test]
    fn test_valid_token() {
        let auth = auth();
        let user = User {
            id: Uuid::new_v4(),
            email: "a@b.co".to_owned(),
            full_name: "A".to_owned(),
            password_hash: String::new(),
            created_at: Utc::now(),
        };
        let (token, _) = auth.generate_token(&user).unwrap();
        let found = require_user(&headers_with(&format!("Bearer {token}")), &auth).unwrap();
        assert_eq!(found.user_id, user.id);

        let err = optional_user(&headers_with("Bearer nope"), &auth).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthInvalid);
    }

    #[test]
    fn test_expired_token() {
        let auth = AuthManager::new(b"middleware-secret", -1, 4);
        let user = User {
            id: Uuid::new_v4(),
            email: "late@b.co".to_owned(),
            full_name: "Late".to_owned(),
            password_hash: String::new(),
            created_at: Utc::now(),
        };
        let (token, _) = auth.generate_token(&user).unwrap();
        let headers = headers_with(&format!("Bearer {token}"));

        let err = require_user(&headers, &auth).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthExpired);
        assert_eq!(err.http_status(), 401);
        let err = optional_user(&headers, &auth).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthExpired);
    }
}
