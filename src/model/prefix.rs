use serde::{Deserialize, Serialize};

/// Per-guild configuration persisted by the backend.
#[derive(Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct GuildStoreDto {
    pub prefixes: Vec<String>,
}

/// Payload for `PUT`/`DELETE /prefixes/{guild_id}`.
#[derive(Serialize, Deserialize)]
pub struct PrefixModifyDto {
    pub prefix: String,
}

/// Response of the prefix routes: the full updated list, adopted verbatim
/// by the client with no local merging.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct PrefixesDto {
    pub prefixes: Vec<String>,
    pub success: bool,
}
