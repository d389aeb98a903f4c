//! Session and token management.
//!
//! A [`Session`] owns the credential chain the dashboard depends on,
//! resolved strictly in this order: Discord OAuth access token, then the
//! user profile, then the backend-issued session token. Each credential
//! is cached in memory and mirrored into the cookie store so a page
//! reload can adopt it without another round trip. The session object is
//! injected into the component tree through context; there is no global
//! singleton.
//!
//! The session token is only ever requested once an OAuth access token
//! is known, and the user profile is never re-fetched while a cached
//! copy exists, except through [`Session::refresh_user_data`] as part of
//! the gateway's reauthentication protocol.

pub mod gateway;
pub mod transport;

#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
mod test;

use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::rc::Rc;

use crate::client::constant::BASE_API_URL;
use crate::client::model::error::ApiError;
use crate::client::storage::KeyValueStore;
use crate::model::api::SessionTokenDto;
use crate::model::command::CommandIndexDto;
use crate::model::guild::GuildDto;
use crate::model::oauth::OAuthTokensDto;
use crate::model::prefix::GuildStoreDto;
use crate::model::user::UserDto;

use gateway::RequestOptions;
use transport::{Method, Transport};

const ACCESS_TOKEN_COOKIE: &str = "access_token";
const TOKEN_TYPE_COOKIE: &str = "token_type";
const REFRESH_TOKEN_COOKIE: &str = "refresh_token";
const USER_DATA_COOKIE: &str = "user_data";
const SESSION_TOKEN_COOKIE: &str = "token";

/// The cached user profile is considered fresh for one day.
const USER_DATA_TTL_DAYS: f64 = 1.0;

pub struct SessionConfig {
    pub base_url: String,
    /// OAuth authorization `code` from the redirect callback, if the
    /// current page load is one.
    pub auth_code: Option<String>,
    /// Redirect URI to echo into the code exchange; only needed when the
    /// callback did not land on the registered production origin.
    pub redirect_uri: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_API_URL.to_string(),
            auth_code: None,
            redirect_uri: None,
        }
    }
}

#[derive(Default)]
pub(crate) struct SessionState {
    pub(crate) access_token: Option<String>,
    pub(crate) token_type: Option<String>,
    pub(crate) session_token: Option<String>,
    pub(crate) user: Option<UserDto>,
    pub(crate) guilds: Option<Vec<GuildDto>>,
    pub(crate) guild_stores: HashMap<String, Rc<GuildStoreDto>>,
    pub(crate) commands: Option<Rc<CommandIndexDto>>,
}

pub struct Session<T: Transport, S: KeyValueStore> {
    transport: T,
    store: S,
    config: SessionConfig,
    /// Interior mutability instead of `&mut self` so UI callers can share
    /// the session behind an `Rc`. Borrows are short-lived and never held
    /// across an await point.
    state: RefCell<SessionState>,
}

impl<T: Transport, S: KeyValueStore> Session<T, S> {
    pub fn new(transport: T, store: S, config: SessionConfig) -> Self {
        Self {
            transport,
            store,
            config,
            state: RefCell::new(SessionState::default()),
        }
    }

    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub(crate) fn state(&self) -> Ref<'_, SessionState> {
        self.state.borrow()
    }

    pub(crate) fn state_mut(&self) -> RefMut<'_, SessionState> {
        self.state.borrow_mut()
    }

    /// Resolves the OAuth access token, in order of preference: the
    /// cookie-cached token, then an exchange of the authorization `code`
    /// this page load was called back with. Returns `None` when neither
    /// exists, which callers interpret as "not logged in". Ensures the
    /// user profile is loaded before returning a token.
    pub async fn ensure_access_token(&self) -> Result<Option<String>, ApiError> {
        let cached = (
            self.store.get(ACCESS_TOKEN_COOKIE),
            self.store.get(TOKEN_TYPE_COOKIE),
        );
        if let (Some(token), Some(token_type)) = cached {
            {
                let mut state = self.state_mut();
                state.access_token = Some(token.clone());
                state.token_type = Some(token_type);
            }
            self.ensure_user_data().await?;
            return Ok(Some(token));
        }

        let Some(code) = self.config.auth_code.clone() else {
            return Ok(None);
        };

        let tokens = self.exchange_oauth(&code).await?;
        let ttl_days = tokens.expires_in as f64 / 86_400.0;
        self.store
            .set(ACCESS_TOKEN_COOKIE, &tokens.access_token, Some(ttl_days));
        self.store
            .set(TOKEN_TYPE_COOKIE, &tokens.token_type, Some(ttl_days));
        // Persisted for a future refresh flow; the backend does not
        // implement one yet.
        self.store
            .set(REFRESH_TOKEN_COOKIE, &tokens.refresh_token, None);
        {
            let mut state = self.state_mut();
            state.access_token = Some(tokens.access_token.clone());
            state.token_type = Some(tokens.token_type.clone());
        }
        self.ensure_user_data().await?;
        Ok(Some(tokens.access_token))
    }

    /// Whether an OAuth access token could be resolved; the guard in
    /// front of every authenticated operation.
    pub async fn login(&self) -> Result<bool, ApiError> {
        Ok(self.ensure_access_token().await?.is_some())
    }

    /// Returns the user profile from memory, then from the cookie cache,
    /// then from the backend.
    pub async fn ensure_user_data(&self) -> Result<UserDto, ApiError> {
        if let Some(user) = self.state().user.clone() {
            return Ok(user);
        }

        if let Some(raw) = self.store.get(USER_DATA_COOKIE) {
            // A corrupt cache entry is treated as absent.
            if let Ok(user) = serde_json::from_str::<UserDto>(&raw) {
                self.state_mut().user = Some(user.clone());
                return Ok(user);
            }
        }

        self.refresh_user_data().await
    }

    /// Fetches the profile from the backend and rewrites the cookie
    /// cache. Called directly by the gateway when the backend signals
    /// that reauthentication is required.
    pub async fn refresh_user_data(&self) -> Result<UserDto, ApiError> {
        let user = self.fetch_user_data().await?;
        if let Ok(raw) = serde_json::to_string(&user) {
            self.store
                .set(USER_DATA_COOKIE, &raw, Some(USER_DATA_TTL_DAYS));
        }
        Ok(user)
    }

    /// Returns the backend session token, issuing a fresh one when none
    /// is cached or `force` is set. Requires a successful [`login`];
    /// a session token is never requested before an OAuth access token
    /// is known.
    ///
    /// [`login`]: Session::login
    pub async fn ensure_session_token(&self, force: bool) -> Result<String, ApiError> {
        if !force {
            if let Some(token) = self.state().session_token.clone() {
                return Ok(token);
            }
            if let Some(token) = self.store.get(SESSION_TOKEN_COOKIE) {
                self.state_mut().session_token = Some(token.clone());
                return Ok(token);
            }
        }

        if !self.login().await? {
            return Err(ApiError::Transport {
                route: "/auth".to_string(),
                message: "cannot issue a session token without an OAuth access token".to_string(),
            });
        }
        self.fetch_session_token().await
    }

    /// Exchanges an authorization code for an OAuth token set via the
    /// backend.
    async fn exchange_oauth(&self, code: &str) -> Result<OAuthTokensDto, ApiError> {
        let mut params = vec![("code".to_string(), code.to_string())];
        if let Some(redirect_uri) = self.config.redirect_uri.clone() {
            params.push(("redirect_uri".to_string(), redirect_uri));
        }

        self.fetch_json(
            Method::Post,
            "/exchange-oauth",
            RequestOptions {
                params,
                authenticate: false,
                ..Default::default()
            },
        )
        .await
    }

    async fn fetch_user_data(&self) -> Result<UserDto, ApiError> {
        let (token, token_type) = self.oauth_params("/users/@me")?;
        let user: UserDto = self
            .fetch_json(
                Method::Get,
                "/users/@me",
                RequestOptions {
                    params: vec![("token".to_string(), token), ("tt".to_string(), token_type)],
                    authenticate: false,
                    ..Default::default()
                },
            )
            .await?;
        self.state_mut().user = Some(user.clone());
        Ok(user)
    }

    async fn fetch_session_token(&self) -> Result<String, ApiError> {
        let user = self.ensure_user_data().await?;
        let (token, token_type) = self.oauth_params("/auth")?;
        let route = format!("/auth/{}", user.id);

        let issued: SessionTokenDto = self
            .fetch_json(
                Method::Post,
                &route,
                RequestOptions {
                    params: vec![("token".to_string(), token), ("tt".to_string(), token_type)],
                    authenticate: false,
                    ..Default::default()
                },
            )
            .await?;
        self.store.set(SESSION_TOKEN_COOKIE, &issued.token, None);
        self.state_mut().session_token = Some(issued.token.clone());
        Ok(issued.token)
    }

    /// The OAuth credential pair used to authenticate against the
    /// Discord-proxy routes, adopting the cookie copy into memory when
    /// needed.
    fn oauth_params(&self, route: &str) -> Result<(String, String), ApiError> {
        {
            let state = self.state();
            if let (Some(token), Some(token_type)) =
                (state.access_token.clone(), state.token_type.clone())
            {
                return Ok((token, token_type));
            }
        }

        if let (Some(token), Some(token_type)) = (
            self.store.get(ACCESS_TOKEN_COOKIE),
            self.store.get(TOKEN_TYPE_COOKIE),
        ) {
            let mut state = self.state_mut();
            state.access_token = Some(token.clone());
            state.token_type = Some(token_type.clone());
            return Ok((token, token_type));
        }

        Err(ApiError::Transport {
            route: route.to_string(),
            message: "no OAuth access token available".to_string(),
        })
    }
}
