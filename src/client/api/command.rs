use std::rc::Rc;

use crate::client::model::error::ApiError;
use crate::client::session::gateway::RequestOptions;
use crate::client::session::transport::{Method, Transport};
use crate::client::session::Session;
use crate::client::storage::KeyValueStore;
use crate::model::command::CommandIndexDto;

impl<T: Transport, S: KeyValueStore> Session<T, S> {
    /// The public command index, cached for the lifetime of the page.
    pub async fn ensure_commands(&self) -> Result<Rc<CommandIndexDto>, ApiError> {
        if let Some(commands) = self.state().commands.clone() {
            return Ok(commands);
        }

        let index: CommandIndexDto = self
            .request_json(
                Method::Get,
                "/commands",
                RequestOptions {
                    authenticate: false,
                    ..Default::default()
                },
            )
            .await?;
        let index = Rc::new(index);
        self.state_mut().commands = Some(index.clone());
        Ok(index)
    }
}
