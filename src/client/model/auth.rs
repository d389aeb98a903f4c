use crate::{client::model::error::ApiError, model::user::UserDto};

/// Authentication state resolved once at app start and shared with every
/// page through context.
#[derive(Clone, PartialEq)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    /// User is authenticated
    Authenticated(UserDto),
    /// No cookie-cached token and no OAuth callback code
    NotLoggedIn,
    /// Failed to resolve credentials
    Error(ApiError),
}
