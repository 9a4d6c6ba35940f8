// tests/support/mocks/security.rs
use std::sync::atomic::{AtomicU64, Ordering};

use shelf_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::security::{IssuedToken, TokenIssuer},
};
use shelf_core::domain::user::TokenDigest;

/// Hands out `token-1`, `token-2`, ... with a readable digest.
#[derive(Default)]
pub struct SequentialTokenIssuer {
    next: AtomicU64,
}

impl TokenIssuer for SequentialTokenIssuer {
    fn issue(&self) -> ApplicationResult<IssuedToken> {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        let token = format!("token-{n}");
        let digest = self.digest(&token)?;
        Ok(IssuedToken { token, digest })
    }

    fn digest(&self, token: &str) -> ApplicationResult<TokenDigest> {
        if token.is_empty() {
            return Err(ApplicationError::unauthorized("missing bearer token"));
        }
        Ok(TokenDigest::new(format!("digest:{token}"))?)
    }
}
