//! API DTOs (Data Transfer Objects)
//!
//! Explicit typed request/response structs per endpoint. Required fields
//! are modeled as `Option` so a missing field surfaces as a structured
//! `ValidationFailure` instead of a bare deserialization error.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Role code; defaults to "user" when omitted
    pub role: Option<String>,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub subject: String,
    pub role: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed credential token; present it as `Authorization: Bearer <token>`
    pub token: String,
    pub subject: String,
    pub role: String,
}

// ============================================================================
// Protected resources
// ============================================================================

/// Profile response (any authenticated identity)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub message: String,
    pub subject: String,
    pub role: String,
}

/// Admin response (admin role required)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub message: String,
}
