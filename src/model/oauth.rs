use serde::{Deserialize, Serialize};

/// Token set returned by the backend's `POST /exchange-oauth` route after
/// it redeems an authorization code with Discord.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct OAuthTokensDto {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: u64,
    pub token_type: String,
}
