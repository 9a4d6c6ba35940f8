// src/infrastructure/security/token.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::{IssuedToken, TokenIssuer},
};
use crate::domain::user::TokenDigest;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Opaque bearer tokens made of random UUID material. Stored form is the
/// base64url (unpadded) SHA-256 of the token.
#[derive(Default, Clone)]
pub struct Sha256TokenIssuer;

fn digest_of(token: &str) -> String {
    let hash = Sha256::digest(token.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

impl TokenIssuer for Sha256TokenIssuer {
    fn issue(&self) -> ApplicationResult<IssuedToken> {
        let token = format!(
            "{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        );
        let digest = TokenDigest::new(digest_of(&token))?;
        Ok(IssuedToken { token, digest })
    }

    fn digest(&self, token: &str) -> ApplicationResult<TokenDigest> {
        if token.is_empty() {
            return Err(ApplicationError::unauthorized("missing bearer token"));
        }
        Ok(TokenDigest::new(digest_of(token))?)
    }
}
