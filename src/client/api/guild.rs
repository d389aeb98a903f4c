use std::rc::Rc;

use crate::client::model::error::ApiError;
use crate::client::session::gateway::RequestOptions;
use crate::client::session::transport::{Method, Transport};
use crate::client::session::Session;
use crate::client::storage::KeyValueStore;
use crate::model::guild::GuildDto;
use crate::model::prefix::GuildStoreDto;

impl<T: Transport, S: KeyValueStore> Session<T, S> {
    /// Guild list for the logged-in user; `None` when not logged in.
    /// Fetched once and cached for the lifetime of the page.
    pub async fn ensure_guild_data(&self) -> Result<Option<Vec<GuildDto>>, ApiError> {
        if !self.login().await? {
            return Ok(None);
        }
        if let Some(guilds) = self.state().guilds.clone() {
            return Ok(Some(guilds));
        }

        let user = self.ensure_user_data().await?;
        let guilds: Vec<GuildDto> = self
            .request_json(
                Method::Get,
                "/discord/guilds",
                RequestOptions {
                    params: vec![("user_id".to_string(), user.id)],
                    ..Default::default()
                },
            )
            .await?;
        self.state_mut().guilds = Some(guilds.clone());
        Ok(Some(guilds))
    }

    /// Backend-persisted config for one guild, cached by guild id. The
    /// cache hands out the same `Rc` on every call and is never evicted
    /// short of a full page reload.
    pub async fn ensure_guild_store(&self, guild_id: &str) -> Result<Rc<GuildStoreDto>, ApiError> {
        if let Some(store) = self.state().guild_stores.get(guild_id).cloned() {
            return Ok(store);
        }

        let route = format!("/data/{}", guild_id);
        let data: GuildStoreDto = self
            .request_json(Method::Get, &route, RequestOptions::default())
            .await?;
        let data = Rc::new(data);
        self.state_mut()
            .guild_stores
            .insert(guild_id.to_string(), data.clone());
        Ok(data)
    }
}
