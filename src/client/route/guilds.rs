use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage, Page},
    constant::{BOT_INVITE_URL, OAUTH_AUTHORIZE_URL, SITE_NAME},
    model::error::ApiError,
    router::Route,
};
use crate::model::guild::{GuildDto, GuildStatus};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Search filter plus status ordering: available guilds first, exact id
/// matches allowed.
fn filter_guilds(mut guilds: Vec<GuildDto>, query: &str) -> Vec<GuildDto> {
    let query = query.to_lowercase();
    guilds.retain(|guild| {
        query.is_empty() || guild.id == query || guild.name.to_lowercase().contains(&query)
    });
    guilds.sort_by_key(|guild| std::cmp::Reverse(guild.status));
    guilds
}

/// Server selection page; also the landing page of the OAuth redirect
/// callback, which the session picks up from the query string.
#[component]
pub fn Guilds() -> Element {
    let mut guilds = use_signal(|| None::<Result<Option<Vec<GuildDto>>, ApiError>>);
    let mut search = use_signal(String::new);

    #[cfg(feature = "web")]
    {
        let session = crate::client::session::web::use_session();
        let future = use_resource(move || {
            let session = session.clone();
            async move { session.ensure_guild_data().await }
        });
        if let Some(result) = &*future.read_unchecked() {
            if guilds().is_none() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch guilds: {}", err);
                }
                guilds.set(Some(result.clone()));
            }
        }
    }

    let body = match guilds() {
        None => rsx! {
            LoadingPage {}
        },
        Some(Ok(None)) => rsx! {
            Page {
                class: "page-centered",
                p {
                    class: "logged-out",
                    "You are not logged in. Please "
                    a { href: OAUTH_AUTHORIZE_URL, "log in" }
                    " to view your servers."
                }
            }
        },
        Some(Ok(Some(list))) => {
            let filtered = filter_guilds(list, &search());
            rsx! {
                Page {
                    div {
                        class: "guild-area",
                        h1 { "Servers" }
                        p { "Please select a server to continue." }
                        input {
                            class: "guild-search",
                            placeholder: "Search...",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                        div {
                            class: "guild-grid",
                            for guild in filtered {
                                GuildButton { guild }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(error)) => rsx! {
            ErrorPage { status: error.status().unwrap_or(500), message: error.message() }
        },
    };

    rsx! {
        Title { "{SITE_NAME}: Server Selection" }
        {body}
    }
}

#[component]
fn GuildButton(guild: GuildDto) -> Element {
    match guild.status {
        GuildStatus::Available => rsx! {
            Link {
                to: Route::Dashboard { guild_id: guild.id.clone() },
                class: "guild-button",
                img {
                    class: "guild-icon",
                    src: "{guild.icon_url()}",
                    alt: "{guild.name} icon",
                }
                span { class: "guild-name", "{guild.name}" }
            }
        },
        status => rsx! {
            div {
                class: "guild-button guild-button-disabled",
                img {
                    class: "guild-icon",
                    src: "{guild.icon_url()}",
                    alt: "{guild.name} icon",
                }
                div {
                    class: "guild-content",
                    span { class: "guild-name", "{guild.name}" }
                    span {
                        class: "guild-reason",
                        if status == GuildStatus::NoPermissions {
                            "You lack permissions."
                        } else {
                            "I'm not in this server. "
                            a {
                                href: "{BOT_INVITE_URL}&guild_id={guild.id}",
                                "Invite me!"
                            }
                        }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild(id: &str, name: &str, status: u8) -> GuildDto {
        serde_json::from_str(&format!(
            r#"{{"id":"{}","name":"{}","owner":false,"permissions":"0","features":[],"status":{}}}"#,
            id, name, status
        ))
        .unwrap()
    }

    #[test]
    fn filters_by_name_and_exact_id() {
        let guilds = vec![
            guild("1", "Rust Hangout", 2),
            guild("2", "Art Club", 2),
            guild("3", "rustaceans", 0),
        ];

        let by_name = filter_guilds(guilds.clone(), "rust");
        assert_eq!(by_name.len(), 2);

        let by_id = filter_guilds(guilds, "2");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].name, "Art Club");
    }

    #[test]
    fn sorts_available_guilds_first() {
        let guilds = vec![
            guild("1", "a", 0),
            guild("2", "b", 2),
            guild("3", "c", 1),
        ];

        let sorted = filter_guilds(guilds, "");
        assert_eq!(sorted[0].status, GuildStatus::Available);
        assert_eq!(sorted[2].status, GuildStatus::NotInvited);
    }
}
