use serde::{Deserialize, Serialize};

/// JWT payload: the account email plus issue and expiry timestamps.
/// Tokens are stateless; nothing here is stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub iat: usize, // issued at (unix timestamp)
    pub exp: usize, // expires at (unix timestamp)
}
