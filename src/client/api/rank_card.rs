use crate::client::model::error::ApiError;
use crate::client::session::gateway::RequestOptions;
use crate::client::session::transport::{Method, Transport};
use crate::client::session::Session;
use crate::client::storage::KeyValueStore;
use crate::model::rank_card::{RankCardConfigDto, RankCardPatchDto};

impl<T: Transport, S: KeyValueStore> Session<T, S> {
    /// The logged-in user's rank card configuration.
    pub async fn fetch_rank_card(&self) -> Result<RankCardConfigDto, ApiError> {
        let user = self.ensure_user_data().await?;
        let route = format!("/rank-card/{}", user.id);
        self.request_json(Method::Get, &route, RequestOptions::default())
            .await
    }

    /// Applies a partial update and returns the stored configuration.
    pub async fn update_rank_card(
        &self,
        patch: &RankCardPatchDto,
    ) -> Result<RankCardConfigDto, ApiError> {
        let user = self.ensure_user_data().await?;
        let route = format!("/rank-card/{}", user.id);
        let payload = serde_json::to_value(patch).map_err(|err| ApiError::Transport {
            route: route.clone(),
            message: format!("failed to serialize request body: {}", err),
        })?;

        self.request_json(
            Method::Patch,
            &route,
            RequestOptions {
                json: Some(payload),
                ..Default::default()
            },
        )
        .await
    }
}
