use std::rc::Rc;

use crate::client::model::error::ApiError;
use crate::client::session::gateway::RequestOptions;
use crate::client::session::transport::{Method, Transport};
use crate::client::session::Session;
use crate::client::storage::KeyValueStore;
use crate::model::prefix::{GuildStoreDto, PrefixModifyDto, PrefixesDto};

impl<T: Transport, S: KeyValueStore> Session<T, S> {
    /// Adds a command prefix for a guild and adopts the backend's updated
    /// list into the guild-store cache.
    pub async fn add_prefix(&self, guild_id: &str, prefix: &str) -> Result<PrefixesDto, ApiError> {
        self.modify_prefix(Method::Put, guild_id, prefix).await
    }

    /// Removes a command prefix for a guild.
    pub async fn remove_prefix(
        &self,
        guild_id: &str,
        prefix: &str,
    ) -> Result<PrefixesDto, ApiError> {
        self.modify_prefix(Method::Delete, guild_id, prefix).await
    }

    /// The prefix routes always respond with the full updated list, which
    /// replaces the cached store verbatim; there is no client-side merge.
    async fn modify_prefix(
        &self,
        method: Method,
        guild_id: &str,
        prefix: &str,
    ) -> Result<PrefixesDto, ApiError> {
        let route = format!("/prefixes/{}", guild_id);
        let payload = serde_json::to_value(PrefixModifyDto {
            prefix: prefix.to_string(),
        })
        .map_err(|err| ApiError::Transport {
            route: route.clone(),
            message: format!("failed to serialize request body: {}", err),
        })?;

        let updated: PrefixesDto = self
            .request_json(
                method,
                &route,
                RequestOptions {
                    json: Some(payload),
                    ..Default::default()
                },
            )
            .await?;

        self.state_mut().guild_stores.insert(
            guild_id.to_string(),
            Rc::new(GuildStoreDto {
                prefixes: updated.prefixes.clone(),
            }),
        );
        Ok(updated)
    }
}
