mod commands;
mod dashboard;
mod guilds;
mod home;
mod not_found;
mod privacy;
mod rank_card_editor;
mod terms;

pub use commands::Commands;
pub use dashboard::Dashboard;
pub use guilds::Guilds;
pub use home::Home;
pub use not_found::NotFound;
pub use privacy::Privacy;
pub use rank_card_editor::RankCardEditor;
pub use terms::Terms;
