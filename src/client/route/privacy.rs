use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME};

#[component]
pub fn Privacy() -> Element {
    rsx! {
        Title { "{SITE_NAME}: Privacy Policy" }
        Page {
            div {
                class: "legal",
                h1 { "Privacy Policy" }
                p { "Last updated: August 2025" }
                h2 { "What we store" }
                p {
                    "{SITE_NAME} stores the configuration you set per server "
                    "(such as command prefixes), per-user settings (such as "
                    "rank card appearance), and the numeric identifiers Discord "
                    "assigns to users, servers and channels. Message content is "
                    "processed only to match command invocations and is not "
                    "retained."
                }
                h2 { "The dashboard" }
                p {
                    "Logging into the dashboard uses Discord's OAuth2 flow with "
                    "the identify and guilds scopes. The resulting tokens and a "
                    "cached copy of your public profile are kept in cookies in "
                    "your own browser; they are sent to our API only to "
                    "authorize your requests. We never see your Discord "
                    "password."
                }
                h2 { "Data removal" }
                p {
                    "Removing the bot from a server deletes that server's "
                    "stored configuration. You can request deletion of your "
                    "per-user data in the support server linked from the home "
                    "page."
                }
                h2 { "Third parties" }
                p {
                    "We do not sell or share stored data with third parties. "
                    "Data is only disclosed where required by law."
                }
            }
        }
    }
}
