// src/application/ports/security.rs
use crate::application::ApplicationResult;
use crate::domain::user::TokenDigest;

/// A freshly minted bearer token together with the digest that is stored.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub digest: TokenDigest,
}

pub trait TokenIssuer: Send + Sync {
    fn issue(&self) -> ApplicationResult<IssuedToken>;
    /// Digest of a presented token, comparable with the stored one.
    fn digest(&self, token: &str) -> ApplicationResult<TokenDigest>;
}
