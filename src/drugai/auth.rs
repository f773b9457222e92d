//! # Credentials
//!
//! Sign-in and token minting belong to an external identity provider. The
//! rest of the crate only needs two answers from it: "is someone signed in?"
//! and "give me a fresh bearer token". [`CredentialProvider`] captures exactly
//! that, so services and their tests never depend on a real identity backend.
//!
//! - [`EnvCredentials`]: production; reads the token from `DRUGAI_TOKEN`
//! - [`StaticCredentials`]: a fixed token (or none), for tests and scripting

use crate::error::{DrugaiError, Result};
use std::fmt;

pub const TOKEN_ENV: &str = "DRUGAI_TOKEN";

/// A short-lived bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the secret itself.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

pub trait CredentialProvider {
    fn is_authenticated(&self) -> bool;

    /// Fails with [`DrugaiError::Unauthenticated`] when nobody is signed in.
    fn credential(&self) -> Result<Token>;
}

/// Reads the bearer token from the environment on every request, so a token
/// refreshed by an outer tool is picked up without restarting.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(TOKEN_ENV)
    }
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    fn read(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl CredentialProvider for EnvCredentials {
    fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    fn credential(&self) -> Result<Token> {
        self.read().map(Token::new).ok_or(DrugaiError::Unauthenticated)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    token: Option<Token>,
}

impl StaticCredentials {
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self {
            token: Some(Token::new(token)),
        }
    }

    pub fn signed_out() -> Self {
        Self { token: None }
    }
}

impl CredentialProvider for StaticCredentials {
    fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn credential(&self) -> Result<Token> {
        self.token.clone().ok_or(DrugaiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_signed_in() {
        let creds = StaticCredentials::signed_in("abc");
        assert!(creds.is_authenticated());
        assert_eq!(creds.credential().unwrap().as_str(), "abc");
    }

    #[test]
    fn static_signed_out() {
        let creds = StaticCredentials::signed_out();
        assert!(!creds.is_authenticated());
        assert!(matches!(
            creds.credential(),
            Err(DrugaiError::Unauthenticated)
        ));
    }

    #[test]
    fn env_credentials_track_the_variable() {
        let var = "DRUGAI_TEST_TOKEN_AUTH_MODULE";
        let creds = EnvCredentials::new(var);

        std::env::remove_var(var);
        assert!(!creds.is_authenticated());

        std::env::set_var(var, "  ");
        assert!(!creds.is_authenticated());

        std::env::set_var(var, "jwt-value");
        assert_eq!(creds.credential().unwrap().as_str(), "jwt-value");
        std::env::remove_var(var);
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = Token::new("secret");
        assert_eq!(format!("{:?}", token), "Token(***)");
    }
}
