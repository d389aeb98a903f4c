use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{
    Commands, Dashboard, Guilds, Home, NotFound, Privacy, RankCardEditor, Terms,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/guilds")]
    Guilds {},

    #[route("/guild/:guild_id")]
    Dashboard { guild_id: String },

    #[route("/rank-card")]
    RankCardEditor {},

    #[route("/commands")]
    Commands {},

    #[route("/terms")]
    Terms {},

    #[route("/privacy")]
    Privacy {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
