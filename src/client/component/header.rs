use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{
    constant::{OAUTH_AUTHORIZE_URL, SITE_NAME},
    model::auth::AuthState,
    router::Route,
};

#[component]
pub fn Header() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let state = auth.read();

    rsx!(div {
        class: "header",
        div {
            class: "header-nav",
            Link {
                to: Route::Home {},
                class: "header-brand",
                p { {SITE_NAME} }
            }
            Link { to: Route::Guilds {}, "Dashboard" }
            Link { to: Route::Commands {}, "Commands" }
            Link { to: Route::RankCardEditor {}, "Rank Card" }
        }
        div {
            class: "header-login",
            match &*state {
                AuthState::Authenticated(user) => rsx! {
                    img {
                        class: "header-avatar",
                        src: "{user.avatar_url()}",
                        alt: "{user.username} avatar",
                    }
                    span { "{user.tag()}" }
                },
                AuthState::Initializing => rsx! {},
                _ => rsx! {
                    a {
                        href: OAUTH_AUTHORIZE_URL,
                        class: "header-login-link",
                        Icon {
                            width: 22,
                            height: 22,
                            icon: FaDiscord
                        }
                        span { "Log In" }
                    }
                }
            }
        }
    })
}
