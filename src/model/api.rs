use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Backend-issued credential for this application's own API, exchanged
/// for the user's OAuth identity via `POST /auth/{user_id}`.
#[derive(Serialize, Deserialize, Clone)]
pub struct SessionTokenDto {
    pub token: String,
}
