use serde::{Deserialize, Serialize};

/// Claims carried by the access token. Tokens are issued by the external
/// identity provider; the backend only validates them and reads `sub` as
/// the creator identity for new records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user id
    pub username: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}
