use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by the HS256 tokens the auth collaborator issues.
///
/// The `sub` field is the user's UUID; `name`/`email` are optional display
/// hints. Token issuance itself is out of scope here — this backend only
/// verifies and decodes.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The user UUID.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
    /// User's display name, if the issuer included it.
    pub name: Option<String>,
    /// User's email, if the issuer included it.
    pub email: Option<String>,
}

impl Claims {
    /// Extract the user UUID from the `sub` claim.
    pub fn user_id(&self) -> Result<Uuid, String> {
        Uuid::parse_str(&self.sub).map_err(|e| format!("Invalid UUID in sub claim: {e}"))
    }
}

/// Validate an HS256 JWT against the shared secret and return its claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("{:?}", e.kind()))
}
