//! API token issuance and resolution.
//!
//! Keys are 40 lowercase hexadecimal characters drawn from the thread-local CSPRNG. A user
//! holds at most one token; rotating replaces the key in place.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::token::TokenRepository, error::AppError, middleware::access::Identity,
};

/// Length of a token key in hex characters.
const TOKEN_KEY_LENGTH: usize = 40;

const HEX_CHARSET: &[u8] = b"0123456789abcdef";

pub struct TokenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a presented key to an identity.
    ///
    /// # Returns
    /// - `Ok(Some(Identity))` - Key belongs to a user
    /// - `Ok(None)` - Key is unknown
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn resolve(&self, key: &str) -> Result<Option<Identity>, AppError> {
        if !is_well_formed(key) {
            return Ok(None);
        }

        Ok(TokenRepository::new(self.db).find_identity(key).await?)
    }

    /// Issues the first token of a newly created user.
    pub async fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let token = TokenRepository::new(self.db)
            .create(user_id, generate_key())
            .await?;

        Ok(token.key)
    }

    /// Replaces the user's token with a freshly generated one.
    ///
    /// # Returns
    /// - `Ok(String)` - The new key; the previous key no longer resolves
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn rotate(&self, user_id: i32) -> Result<String, AppError> {
        let token = TokenRepository::new(self.db)
            .replace(user_id, generate_key())
            .await?;

        tracing::info!(user_id, "rotated API token");

        Ok(token.key)
    }
}

/// Generates a random token key.
pub fn generate_key() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_KEY_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..HEX_CHARSET.len());
            HEX_CHARSET[idx] as char
        })
        .collect()
}

/// Cheap shape check so garbage keys never reach the database.
fn is_well_formed(key: &str) -> bool {
    key.len() == TOKEN_KEY_LENGTH && key.bytes().all(|b| b.is_ascii_hexdigit())
}
