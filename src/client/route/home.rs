use dioxus::prelude::*;

use crate::client::{
    component::Page,
    constant::{BOT_ICON_URL, BOT_INVITE_URL, SITE_NAME},
    router::Route,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        Title { "{SITE_NAME}: Homepage" }
        Page {
            div {
                class: "banner",
                img {
                    class: "banner-icon",
                    src: BOT_ICON_URL,
                    alt: "{SITE_NAME} icon",
                }
                div {
                    class: "banner-content",
                    h1 { {SITE_NAME} }
                    p { "A multipurpose, next-generation Discord bot." }
                    div {
                        class: "banner-buttons",
                        a {
                            href: BOT_INVITE_URL,
                            class: "button",
                            "Add {SITE_NAME}"
                        }
                        Link {
                            to: Route::Guilds {},
                            class: "button button-dark",
                            "Dashboard"
                        }
                    }
                }
            }
            div {
                class: "features",
                div {
                    class: "feature",
                    h2 { "Leveling, your way" }
                    p {
                        "Reward activity with per-server leveling, and let every "
                        "member style their own rank card down to the last pixel."
                    }
                }
                div {
                    class: "feature",
                    h2 { "Your prefixes" }
                    p {
                        "Run {SITE_NAME} alongside any other bot: add as many "
                        "command prefixes per server as you like, straight from "
                        "the dashboard."
                    }
                }
                div {
                    class: "feature",
                    h2 { "Hundreds of commands" }
                    p {
                        "Moderation, utilities, image manipulation and more, "
                        "all documented on the commands page."
                    }
                }
            }
        }
    }
}
