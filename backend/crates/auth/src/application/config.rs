//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup
//! and shared read-only across all requests.

use std::time::Duration;

use platform::password::HashParams;
use platform::rate_limit::RateLimitConfig;

use crate::token::{TokenIssuer, TokenVerifier};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token signing secret (32 bytes), process-wide and immutable
    pub token_secret: [u8; 32],
    /// Default token time-to-live (1 hour)
    pub token_ttl: Duration,
    /// Clock skew tolerance for expiry checks (zero)
    pub clock_skew: Duration,
    /// Argon2id cost parameters (OWASP defaults)
    pub hash_params: HashParams,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Login attempt throttling (5 attempts per minute per client)
    pub login_rate_limit: RateLimitConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(3600), // 1 hour
            clock_skew: Duration::ZERO,
            hash_params: HashParams::default(),
            password_pepper: None,
            login_rate_limit: RateLimitConfig::new(5, 60),
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret
    ///
    /// Tokens signed with it do not survive a process restart.
    pub fn with_random_secret() -> Self {
        let bytes = platform::crypto::random_bytes(32);
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&bytes);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for local development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Build a token issuer over this config's secret
    pub fn issuer(&self) -> TokenIssuer {
        TokenIssuer::new(self.token_secret)
    }

    /// Build a token verifier over this config's secret and skew
    pub fn verifier(&self) -> TokenVerifier {
        TokenVerifier::new(self.token_secret, self.clock_skew)
    }
}
