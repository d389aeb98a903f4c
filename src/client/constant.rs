pub const SITE_NAME: &str = "Prism";

/// Origin of the bot's REST backend.
pub const BASE_API_URL: &str = "https://api.prismbot.gg";

/// Authorization-code grant URL; the callback lands on `/guilds` with a
/// `code` query parameter.
pub const OAUTH_AUTHORIZE_URL: &str = "https://discord.com/oauth2/authorize?response_type=code&client_id=741203923418284083&scope=identify%20guilds&redirect_uri=https://prismbot.gg/guilds";

/// Invite URL for adding the bot to a guild.
pub const BOT_INVITE_URL: &str = "https://discord.com/oauth2/authorize?client_id=741203923418284083&scope=bot+applications.commands&permissions=8";

pub const BOT_ICON_URL: &str = "https://cdn.discordapp.com/avatars/741203923418284083/prism.png";
