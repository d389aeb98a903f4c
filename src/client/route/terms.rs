use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME};

#[component]
pub fn Terms() -> Element {
    rsx! {
        Title { "{SITE_NAME}: Terms of Service" }
        Page {
            div {
                class: "legal",
                h1 { "Terms of Service" }
                p { "Last updated: August 2025" }
                p {
                    "By inviting {SITE_NAME} to a Discord server or using its "
                    "web dashboard, you agree to these terms. If you do not "
                    "agree with them, remove the bot from your server and stop "
                    "using the dashboard."
                }
                h2 { "Use of the service" }
                p {
                    "{SITE_NAME} is provided free of charge, as is, without "
                    "warranty of any kind. You may not use the bot or the "
                    "dashboard to break Discord's Terms of Service or Community "
                    "Guidelines, to harass others, or to disrupt the service "
                    "itself, including attempts to overwhelm the API or to gain "
                    "access to servers you do not manage."
                }
                h2 { "Your content" }
                p {
                    "Configuration you submit through the dashboard, such as "
                    "command prefixes and rank card settings, is stored so the "
                    "bot can apply it. You are responsible for anything you "
                    "upload or link, including rank card background images."
                }
                h2 { "Availability" }
                p {
                    "We may add, change or remove features, or suspend the "
                    "service entirely, at any time and without notice. Access "
                    "may be revoked for individual users or servers that abuse "
                    "the service."
                }
                h2 { "Contact" }
                p {
                    "Questions about these terms can be raised in the support "
                    "server linked from the home page."
                }
            }
        }
    }
}
