use dioxus::prelude::*;

use crate::client::{
    component::{
        page::{ErrorPage, LoadingPage, Page},
        RankCard,
    },
    constant::{OAUTH_AUTHORIZE_URL, SITE_NAME},
    model::{auth::AuthState, error::ApiError},
};
use crate::model::rank_card::{css_color, parse_css_color, RankCardConfigDto, RankCardPatchDto};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn RankCardEditor() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let mut config = use_signal(|| None::<RankCardConfigDto>);
    let mut load_error = use_signal(|| None::<ApiError>);
    let mut save_error = use_signal(|| None::<String>);
    let mut saved = use_signal(|| false);
    let mut busy = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let session = crate::client::session::web::use_session();
        let future = use_resource(move || {
            let session = session.clone();
            let state = auth();
            async move {
                match state {
                    AuthState::Authenticated(_) => session.fetch_rank_card().await.map(Some),
                    _ => Ok(None),
                }
            }
        });
        match &*future.read_unchecked() {
            Some(Ok(Some(fetched))) => {
                if config().is_none() {
                    config.set(Some(fetched.clone()));
                }
            }
            Some(Err(err)) => {
                if load_error().is_none() {
                    tracing::error!("Failed to fetch rank card: {}", err);
                    load_error.set(Some(err.clone()));
                }
            }
            _ => (),
        }
    }

    #[cfg(feature = "web")]
    let on_save: EventHandler<RankCardConfigDto> = {
        let session = crate::client::session::web::use_session();
        EventHandler::new(move |current: RankCardConfigDto| {
            let session = session.clone();
            busy.set(true);
            spawn(async move {
                let patch = RankCardPatchDto {
                    font: Some(current.font.clone()),
                    primary_color: Some(current.primary_color),
                    secondary_color: Some(current.secondary_color),
                    tertiary_color: Some(current.tertiary_color),
                    background_url: current.background_url.clone(),
                    background_color: Some(current.background_color),
                    background_image_alpha: Some(current.background_image_alpha),
                    background_blur: Some(current.background_blur),
                    overlay_color: Some(current.overlay_color),
                    overlay_alpha: Some(current.overlay_alpha),
                    overlay_border_radius: Some(current.overlay_border_radius),
                    avatar_border_color: Some(current.avatar_border_color),
                    avatar_border_alpha: Some(current.avatar_border_alpha),
                    avatar_border_radius: Some(current.avatar_border_radius),
                    progress_bar_color: Some(current.progress_bar_color),
                    progress_bar_alpha: Some(current.progress_bar_alpha),
                };
                match session.update_rank_card(&patch).await {
                    Ok(stored) => {
                        config.set(Some(stored));
                        save_error.set(None);
                        busy.set(false);
                        saved.set(true);
                        gloo_timers::future::TimeoutFuture::new(2_000).await;
                        saved.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to update rank card: {}", err);
                        save_error.set(Some(err.message()));
                        busy.set(false);
                    }
                }
            });
        })
    };
    #[cfg(not(feature = "web"))]
    let on_save: EventHandler<RankCardConfigDto> = EventHandler::new(|_| {});

    let state = auth.read();

    let body = match &*state {
        AuthState::Initializing => rsx! {
            LoadingPage {}
        },
        AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
            Page {
                class: "page-centered",
                p {
                    class: "logged-out",
                    "You are not logged in. Please "
                    a { href: OAUTH_AUTHORIZE_URL, "log in" }
                    " to edit your rank card."
                }
            }
        },
        AuthState::Authenticated(user) => {
            if let Some(error) = load_error() {
                rsx! {
                    ErrorPage { status: error.status().unwrap_or(500), message: error.message() }
                }
            } else if let Some(current) = config() {
                let save_source = current.clone();
                rsx! {
                        Page {
                            div {
                                class: "editor",
                                RankCard {
                                    username: user.username.clone(),
                                    discriminator: user.discriminator.clone(),
                                    avatar_url: user.avatar_url(),
                                    rank: 3,
                                    level: 6,
                                    xp: 120,
                                    max_xp: 250,
                                    config: current.clone(),
                                }
                                div {
                                    class: "editor-fields",
                                    ColorField {
                                        label: "Primary text",
                                        value: current.primary_color,
                                        on_change: move |value| {
                                            if let Some(mut updated) = config() {
                                                updated.primary_color = value;
                                                config.set(Some(updated));
                                            }
                                        },
                                    }
                                    ColorField {
                                        label: "Secondary text",
                                        value: current.secondary_color,
                                        on_change: move |value| {
                                            if let Some(mut updated) = config() {
                                                updated.secondary_color = value;
                                                config.set(Some(updated));
                                            }
                                        },
                                    }
                                    ColorField {
                                        label: "Progress fill",
                                        value: current.tertiary_color,
                                        on_change: move |value| {
                                            if let Some(mut updated) = config() {
                                                updated.tertiary_color = value;
                                                config.set(Some(updated));
                                            }
                                        },
                                    }
                                    ColorField {
                                        label: "Background",
                                        value: current.background_color,
                                        on_change: move |value| {
                                            if let Some(mut updated) = config() {
                                                updated.background_color = value;
                                                config.set(Some(updated));
                                            }
                                        },
                                    }
                                    ColorField {
                                        label: "Overlay",
                                        value: current.overlay_color,
                                        on_change: move |value| {
                                            if let Some(mut updated) = config() {
                                                updated.overlay_color = value;
                                                config.set(Some(updated));
                                            }
                                        },
                                    }
                                    ColorField {
                                        label: "Avatar border",
                                        value: current.avatar_border_color,
                                        on_change: move |value| {
                                            if let Some(mut updated) = config() {
                                                updated.avatar_border_color = value;
                                                config.set(Some(updated));
                                            }
                                        },
                                    }
                                    ColorField {
                                        label: "Progress bar",
                                        value: current.progress_bar_color,
                                        on_change: move |value| {
                                            if let Some(mut updated) = config() {
                                                updated.progress_bar_color = value;
                                                config.set(Some(updated));
                                            }
                                        },
                                    }
                                    label {
                                        class: "editor-field",
                                        span { "Overlay opacity" }
                                        input {
                                            r#type: "range",
                                            min: "0",
                                            max: "1",
                                            step: "0.05",
                                            value: "{current.overlay_alpha}",
                                            oninput: move |evt| {
                                                if let Ok(parsed) = evt.value().parse::<f64>() {
                                                    if let Some(mut updated) = config() {
                                                        updated.overlay_alpha = parsed;
                                                        config.set(Some(updated));
                                                    }
                                                }
                                            },
                                        }
                                    }
                                    div {
                                        class: "editor-actions",
                                        button {
                                            class: "button",
                                            disabled: busy(),
                                            onclick: move |_| on_save.call(save_source.clone()),
                                            "Save"
                                        }
                                        if saved() {
                                            span { class: "editor-saved", "Saved!" }
                                        }
                                        if let Some(message) = save_error() {
                                            p { class: "error", "{message}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
            } else {
                rsx! {
                    LoadingPage {}
                }
            }
        }
    };

    rsx! {
        Title { "{SITE_NAME}: Rank Card Editor" }
        {body}
    }
}

#[component]
fn ColorField(label: &'static str, value: u32, on_change: EventHandler<u32>) -> Element {
    rsx! {
        label {
            class: "editor-field",
            span { {label} }
            input {
                r#type: "color",
                value: "{css_color(value)}",
                oninput: move |evt| {
                    if let Some(parsed) = parse_css_color(&evt.value()) {
                        on_change.call(parsed);
                    }
                },
            }
        }
    }
}
