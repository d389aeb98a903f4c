use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage, Page},
    constant::SITE_NAME,
    model::error::ApiError,
    router::Route,
};
use crate::model::guild::GuildDto;
use crate::model::prefix::GuildStoreDto;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Per-guild dashboard: the prefix editor behind the guild banner.
#[component]
pub fn Dashboard(guild_id: String) -> Element {
    let mut guild = use_signal(|| None::<GuildDto>);
    let mut store = use_signal(|| None::<GuildStoreDto>);
    let mut loaded = use_signal(|| false);
    let mut forbidden = use_signal(|| false);
    let mut load_error = use_signal(|| None::<ApiError>);
    let mut action_error = use_signal(|| None::<String>);
    let mut prefix_input = use_signal(String::new);
    let mut busy = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let session = crate::client::session::web::use_session();
        let nav = navigator();
        let future = use_resource({
            let session = session.clone();
            let guild_id = guild_id.clone();
            move || {
                let session = session.clone();
                let guild_id = guild_id.clone();
                async move {
                    let Some(list) = session.ensure_guild_data().await? else {
                        return Ok(None);
                    };
                    let summary = list.into_iter().find(|guild| guild.id == guild_id);
                    let data = session.ensure_guild_store(&guild_id).await?;
                    Ok::<_, ApiError>(Some((summary, (*data).clone())))
                }
            }
        });
        match &*future.read_unchecked() {
            Some(Ok(Some((summary, data)))) => {
                if !loaded() {
                    loaded.set(true);
                    guild.set(summary.clone());
                    store.set(Some(data.clone()));
                }
            }
            Some(Err(err)) => {
                if err.status() == Some(401) {
                    if !forbidden() {
                        forbidden.set(true);
                    }
                } else if load_error().is_none() {
                    tracing::error!("Failed to load guild dashboard: {}", err);
                    load_error.set(Some(err.clone()));
                }
            }
            _ => (),
        }

        // Not logged in: back to server selection.
        let logged_out = matches!(&*future.read_unchecked(), Some(Ok(None)));
        use_effect(use_reactive!(|(logged_out,)| {
            if logged_out {
                nav.push(Route::Guilds {});
            }
        }));
    }

    #[cfg(feature = "web")]
    let on_add: EventHandler<String> = {
        let session = crate::client::session::web::use_session();
        let guild_id = guild_id.clone();
        EventHandler::new(move |prefix: String| {
            let session = session.clone();
            let guild_id = guild_id.clone();
            busy.set(true);
            spawn(async move {
                match session.add_prefix(&guild_id, &prefix).await {
                    Ok(updated) => {
                        store.set(Some(GuildStoreDto {
                            prefixes: updated.prefixes,
                        }));
                        action_error.set(None);
                        prefix_input.set(String::new());
                    }
                    Err(err) => {
                        tracing::error!("Failed to add prefix: {}", err);
                        action_error.set(Some(err.message()));
                    }
                }
                busy.set(false);
            });
        })
    };
    #[cfg(not(feature = "web"))]
    let on_add: EventHandler<String> = EventHandler::new(|_| {});

    #[cfg(feature = "web")]
    let on_remove: EventHandler<String> = {
        let session = crate::client::session::web::use_session();
        let guild_id = guild_id.clone();
        EventHandler::new(move |prefix: String| {
            let session = session.clone();
            let guild_id = guild_id.clone();
            spawn(async move {
                match session.remove_prefix(&guild_id, &prefix).await {
                    Ok(updated) => {
                        store.set(Some(GuildStoreDto {
                            prefixes: updated.prefixes,
                        }));
                        action_error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to remove prefix: {}", err);
                        action_error.set(Some(err.message()));
                    }
                }
            });
        })
    };
    #[cfg(not(feature = "web"))]
    let on_remove: EventHandler<String> = EventHandler::new(|_| {});

    let body = if forbidden() {
        rsx! {
            Page {
                p {
                    class: "error",
                    "Unauthorized! You do not have permissions to access this server's dashboard. "
                    Link { to: Route::Guilds {}, "Select a different server?" }
                }
            }
        }
    } else if let Some(error) = load_error() {
        rsx! {
            ErrorPage { status: error.status().unwrap_or(500), message: error.message() }
        }
    } else if let Some(data) = store() {
        rsx! {
            div {
                class: "guild-bar",
                div {
                    class: "guild-bar-details",
                    if let Some(guild) = guild() {
                        img {
                            class: "guild-icon-small",
                            src: "{guild.icon_url()}",
                            alt: "{guild.name} icon",
                        }
                        span {
                            "Viewing dashboard for "
                            b { "{guild.name}" }
                        }
                    }
                }
                Link { to: Route::Guilds {}, class: "guild-switch", "Switch" }
            }
            Page {
                div {
                    class: "prefix-box",
                    h1 { "Prefixes" }
                    p { "I will respond to messages that start with any of the following:" }
                    if data.prefixes.is_empty() {
                        p { "No prefixes." }
                    }
                    for prefix in data.prefixes.clone() {
                        {
                            let remove_target = prefix.clone();
                            let text_class = if prefix.is_empty() {
                                "prefix-text prefix-blank"
                            } else {
                                "prefix-text"
                            };
                            let display = if prefix.is_empty() {
                                "[blank prefix]".to_string()
                            } else {
                                prefix.clone()
                            };
                            rsx! {
                                div {
                                    class: "prefix-entry",
                                    span { class: "{text_class}", "{display}" }
                                    span {
                                        class: "prefix-delete",
                                        onclick: move |_| on_remove.call(remove_target.clone()),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "prefix-input-row",
                        input {
                            class: "prefix-input",
                            placeholder: "Add a prefix...",
                            maxlength: "100",
                            value: "{prefix_input}",
                            oninput: move |evt| prefix_input.set(evt.value()),
                        }
                        button {
                            class: "prefix-submit",
                            disabled: busy(),
                            onclick: move |_| {
                                let value = prefix_input();
                                if !value.is_empty() {
                                    on_add.call(value);
                                }
                            },
                            "Add"
                        }
                    }
                    if let Some(message) = action_error() {
                        p { class: "error", "{message}" }
                    }
                }
            }
        }
    } else {
        rsx! {
            LoadingPage {}
        }
    };

    rsx! {
        Title { "{SITE_NAME}: Dashboard" }
        {body}
    }
}
