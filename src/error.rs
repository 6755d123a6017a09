/*
 * Responsibility
 * - AuthError: classification of every way the gate can refuse an identity
 * - AppError: the HTTP rejection (status + stable message) and its JSON body
 * - IntoResponse produces `{ "success": false, "message": ... }`
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

pub const MSG_NO_TOKEN: &str = "Access denied. No token provided.";
pub const MSG_INVALID_TOKEN: &str = "Invalid token";
pub const MSG_EXPIRED_TOKEN: &str = "Token has expired";
pub const MSG_AUTH_FAILED: &str = "Authentication failed";
pub const MSG_ACCOUNT_NOT_FOUND: &str = "Token is not valid - user not found";
pub const MSG_ACCOUNT_DEACTIVATED: &str = "Account is deactivated. Please contact support.";
pub const MSG_ADMIN_REQUIRED: &str = "Access denied. Admin privileges required.";
pub const MSG_ADMIN_AUTH_FAILED: &str = "Admin authentication failed";
pub const MSG_INTERNAL: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no token provided")]
    NoToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("token expired")]
    ExpiredToken,
    #[error("token verification failed: {0}")]
    Verification(String),
    #[error("account not found")]
    AccountNotFound,
    #[error("account deactivated")]
    AccountDeactivated,
    #[error("admin role required")]
    RoleDenied,
    #[error("account store failure")]
    Store(#[from] RepoError),
}

impl AuthError {
    /// Infrastructure failures are not authentication outcomes.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),
    #[error("forbidden: {0}")]
    Forbidden(&'static str),
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::Unauthorized(msg) | AppError::Forbidden(msg) => (*msg).to_string(),
            AppError::NotFound { resource } => format!("{resource} not found."),
            AppError::Internal => MSG_INTERNAL.to_string(),
        }
    }

    /// Rejection used by the mandatory policy.
    pub fn from_auth(err: &AuthError) -> Self {
        match err {
            AuthError::NoToken => AppError::Unauthorized(MSG_NO_TOKEN),
            AuthError::InvalidToken => AppError::Unauthorized(MSG_INVALID_TOKEN),
            AuthError::ExpiredToken => AppError::Unauthorized(MSG_EXPIRED_TOKEN),
            AuthError::Verification(_) => AppError::Unauthorized(MSG_AUTH_FAILED),
            AuthError::AccountNotFound => AppError::Unauthorized(MSG_ACCOUNT_NOT_FOUND),
            AuthError::AccountDeactivated => AppError::Unauthorized(MSG_ACCOUNT_DEACTIVATED),
            AuthError::RoleDenied => AppError::Forbidden(MSG_ADMIN_REQUIRED),
            AuthError::Store(_) => AppError::Internal,
        }
    }

    /// Rejection used by the admin policy: every authentication failure reports 403.
    pub fn from_admin_auth(err: &AuthError) -> Self {
        match err {
            AuthError::RoleDenied => AppError::Forbidden(MSG_ADMIN_REQUIRED),
            AuthError::Store(_) => AppError::Internal,
            _ => AppError::Forbidden(MSG_ADMIN_AUTH_FAILED),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            message: self.message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        tracing::error!(error = %e, "repository failure");
        AppError::Internal
    }
}
