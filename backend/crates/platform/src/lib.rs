//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, CSPRNG)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Bearer token transport
//! - Client identification
//! - Rate limiting infrastructure

pub mod bearer;
pub mod client;
pub mod crypto;
pub mod password;
pub mod rate_limit;
