// ABOUTME: JWT-based user authentication with bcrypt password hashing
// ABOUTME: Registration validation, login, token generation and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

//! # Authentication
//!
//! Tokens are HS256 JWTs carrying the user id, email and a fixed audience.
//! Password hashing runs on the blocking pool so request workers never stall
//! on bcrypt.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use oceansafe_core::errors::{AppError, AppResult};
use oceansafe_core::models::User;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::constants::defaults::{JWT_AUDIENCE, MIN_PASSWORD_LENGTH};
use crate::constants::messages;
use crate::database::Database;
use crate::logging::AppLogger;

/// `JWT` validation error with detailed information
#[derive(Debug, Clone, Error)]
pub enum JwtValidationError {
    /// Token has expired
    #[error("JWT token expired at {}", expired_at.format("%Y-%m-%d %H:%M:%S UTC"))]
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
    },
    /// Token signature or claims are invalid
    #[error("JWT token is invalid: {reason}")]
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is not a well-formed JWT
    #[error("JWT token is malformed: {details}")]
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl From<JwtValidationError> for AppError {
    fn from(error: JwtValidationError) -> Self {
        match error {
            JwtValidationError::TokenExpired { .. } => Self::auth_expired(error.to_string()),
            JwtValidationError::TokenInvalid { .. } | JwtValidationError::TokenMalformed { .. } => {
                Self::auth_invalid(error.to_string())
            }
        }
    }
}

/// `JWT` claims for user authentication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Audience (who the token is intended for)
    pub aud: String,
}

impl Claims {
    /// User id from the subject
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` when the subject is not a UUID
    pub fn user_id(&self) -> AppResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| AppError::auth_invalid("Invalid token subject"))
    }
}

/// Registration payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    /// Email address
    pub email: String,
    /// Plain-text password
    pub password: String,
    /// Display name
    pub full_name: String,
}

/// Login payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Token plus the user it belongs to
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    /// Bearer token
    pub token: String,
    /// Token expiry
    pub expires_at: DateTime<Utc>,
    /// Account
    pub user: User,
}

/// Authentication manager for `JWT` tokens and password hashes
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
    bcrypt_cost: u32,
}

impl AuthManager {
    /// Create a new authentication manager
    #[must_use]
    pub fn new(secret: &[u8], token_expiry_hours: i64, bcrypt_cost: u32) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_hours,
            bcrypt_cost,
        }
    }

    /// Build from configuration, generating a per-process secret when none is set
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        let secret = if let Some(secret) = &config.jwt_secret {
            secret.as_bytes().to_vec()
        } else {
            warn!(
                "JWT_SECRET is not set; using a random secret, tokens will not survive a restart"
            );
            generate_jwt_secret().to_vec()
        };
        Self::new(&secret, config.jwt_expiry_hours, config.bcrypt_cost)
    }

    /// Generate a `JWT` token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails
    pub fn generate_token(&self, user: &User) -> AppResult<(String, DateTime<Utc>)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.token_expiry_hours);
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            aud: JWT_AUDIENCE.to_owned(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))?;
        Ok((token, expires_at))
    }

    /// Validate a token and return its claims
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] describing why the token was rejected
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| Self::convert_jwt_error(&e, token, &self.decoding_key))
    }

    /// Convert JWT library errors to detailed validation errors
    fn convert_jwt_error(
        e: &jsonwebtoken::errors::Error,
        token: &str,
        key: &DecodingKey,
    ) -> JwtValidationError {
        match e.kind() {
            ErrorKind::ExpiredSignature => {
                // decode again without expiry checks to report when it expired
                let mut relaxed = Validation::new(Algorithm::HS256);
                relaxed.validate_exp = false;
                relaxed.set_audience(&[JWT_AUDIENCE]);
                let expired_at = decode::<Claims>(token, key, &relaxed)
                    .ok()
                    .and_then(|data| DateTime::from_timestamp(data.claims.exp, 0))
                    .unwrap_or_else(Utc::now);
                JwtValidationError::TokenExpired { expired_at }
            }
            ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
                reason: "Token signature verification failed".into(),
            },
            ErrorKind::InvalidAudience => JwtValidationError::TokenInvalid {
                reason: "Token audience mismatch".into(),
            },
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => JwtValidationError::TokenMalformed {
                details: e.to_string(),
            },
            _ => JwtValidationError::TokenInvalid {
                reason: format!("Token validation failed: {e}"),
            },
        }
    }

    /// Hash a password on the blocking pool
    ///
    /// # Errors
    ///
    /// Returns an internal error if hashing fails or the task panics
    pub async fn hash_password(&self, password: &str) -> AppResult<String> {
        let password = password.to_owned();
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Check a password against a stored hash on the blocking pool
    ///
    /// A corrupt hash counts as a mismatch.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the task panics
    pub async fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
    }

    /// Validate, hash and store a new account, returning a token for it
    ///
    /// # Errors
    ///
    /// Returns a validation error, `ResourceAlreadyExists` for a taken email, or a
    /// database error
    pub async fn register(
        &self,
        database: &Database,
        request: &RegisterRequest,
    ) -> AppResult<AuthResponse> {
        validate_registration(request)?;
        let hash = self.hash_password(&request.password).await?;
        let user = match database
            .create_user(&request.email, &request.full_name, &hash)
            .await
        {
            Ok(user) => user,
            Err(e) => {
                AppLogger::log_auth_event(&request.email, "register", false, Some(&e.message));
                return Err(e);
            }
        };
        AppLogger::log_auth_event(&user.email, "register", true, None);

        let (token, expires_at) = self.generate_token(&user)?;
        Ok(AuthResponse {
            token,
            expires_at,
            user,
        })
    }

    /// Exchange credentials for a token
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` for an unknown email or wrong password
    pub async fn login(
        &self,
        database: &Database,
        request: &LoginRequest,
    ) -> AppResult<AuthResponse> {
        let user = database.get_user_by_email(&request.email).await?;
        let Some(user) = user else {
            AppLogger::log_auth_event(&request.email, "login", false, Some("unknown email"));
            return Err(AppError::auth_invalid(messages::INVALID_CREDENTIALS));
        };

        if !self
            .verify_password(&request.password, &user.password_hash)
            .await?
        {
            AppLogger::log_auth_event(&user.email, "login", false, Some("wrong password"));
            return Err(AppError::auth_invalid(messages::INVALID_CREDENTIALS));
        }

        AppLogger::log_auth_event(&user.email, "login", true, None);
        let (token, expires_at) = self.generate_token(&user)?;
        Ok(AuthResponse {
            token,
            expires_at,
            user,
        })
    }
}

/// Check registration fields in display order
///
/// # Errors
///
/// Returns `InvalidInput` with the user-facing message for the first failing field
pub fn validate_registration(request: &RegisterRequest) -> AppResult<()> {
    if request.full_name.trim().is_empty() {
        return Err(AppError::invalid_input(messages::INVALID_FULL_NAME));
    }
    let email = request.email.trim();
    if email.is_empty() || !email.contains('@') || email.chars().any(char::is_whitespace) {
        return Err(AppError::invalid_input(messages::INVALID_EMAIL));
    }
    if request.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::invalid_input(messages::PASSWORD_TOO_SHORT));
    }
    Ok(())
}

/// Generate a random `JWT` secret from the OS RNG
#[must_use]
pub fn generate_jwt_secret() -> [u8; 64] {
    let mut secret = [0u8; 64];
    OsRng.fill_bytes(&mut secret);
    secret
}
