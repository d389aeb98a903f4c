use dioxus::prelude::*;
use pulldown_cmark::{html, Parser};

use crate::client::{
    component::page::{ErrorPage, LoadingPage, Page},
    constant::SITE_NAME,
    model::error::ApiError,
};
use crate::model::command::{CommandDto, CommandIndexDto};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Renders a command description as inline HTML, substituting the
/// `{PREFIX}` placeholder with the viewer's chosen prefix.
fn render_description(description: &str, prefix: &str) -> String {
    let text = description.replace("{PREFIX}", prefix);
    let mut rendered = String::new();
    html::push_html(&mut rendered, Parser::new(&text));

    // Inline rendering: drop the paragraph wrapper around a
    // single-paragraph input.
    let trimmed = rendered.trim();
    trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
        .unwrap_or(trimmed)
        .to_string()
}

/// Category filter plus the search predicate, flattened into one list.
fn filter_commands(
    index: &CommandIndexDto,
    categories: &[String],
    query: &str,
) -> Vec<CommandDto> {
    let lowered = query.to_lowercase();
    index
        .iter()
        .filter(|(category, _)| categories.is_empty() || categories.contains(category))
        .flat_map(|(_, list)| list.iter().cloned())
        .filter(|command| command.matches(&lowered))
        .collect()
}

#[component]
pub fn Commands() -> Element {
    let mut commands = use_signal(|| None::<Result<CommandIndexDto, ApiError>>);
    let mut categories = use_signal(Vec::<String>::new);
    let mut query = use_signal(String::new);
    let mut prefix = use_signal(|| ">".to_string());
    let mut expanded = use_signal(Vec::<String>::new);

    #[cfg(feature = "web")]
    {
        use crate::client::session::{gateway::query_param, web::location_search};

        let session = crate::client::session::web::use_session();
        let future = use_resource(move || {
            let session = session.clone();
            async move { session.ensure_commands().await }
        });
        match &*future.read_unchecked() {
            Some(Ok(index)) => {
                if commands().is_none() {
                    commands.set(Some(Ok((**index).clone())));

                    // Honor ?prefix= and ?categories= on first load.
                    let search = location_search();
                    if let Some(value) = query_param(&search, "prefix") {
                        prefix.set(value);
                    }
                    if let Some(value) = query_param(&search, "categories") {
                        let resolved: Vec<String> =
                            value.split_whitespace().map(str::to_string).collect();
                        if resolved.iter().all(|category| index.contains_key(category)) {
                            categories.set(resolved);
                        }
                    }
                }
            }
            Some(Err(err)) => {
                if commands().is_none() {
                    tracing::error!("Failed to fetch commands: {}", err);
                    commands.set(Some(Err(err.clone())));
                }
            }
            None => (),
        }
    }

    let body = match commands() {
        None => rsx! {
            LoadingPage {}
        },
        Some(Err(error)) => rsx! {
            ErrorPage { status: error.status().unwrap_or(500), message: error.message() }
        },
        Some(Ok(index)) => {
            let total: usize = index.values().map(Vec::len).sum();
            let selected_categories = categories();
            let filtered = filter_commands(&index, &selected_categories, &query());
            let all_categories: Vec<String> = index.keys().cloned().collect();

            rsx! {
                Page {
                    h1 { class: "commands-header", "Commands" }
                    div {
                        class: "commands-description",
                        div { "Explore the variety of commands {SITE_NAME} has to offer." }
                        div {
                            "Listing "
                            b { "{total}" }
                            " commands"
                        }
                    }
                    div {
                        class: "commands-container",
                        div {
                            class: "category-select",
                            for category in all_categories {
                                {
                                    let toggle_target = category.clone();
                                    let class = if selected_categories.contains(&category) {
                                        "category-button category-selected"
                                    } else {
                                        "category-button"
                                    };
                                    rsx! {
                                        div {
                                            class: "{class}",
                                            onclick: move |_| {
                                                let mut current = categories();
                                                if let Some(position) =
                                                    current.iter().position(|entry| entry == &toggle_target)
                                                {
                                                    current.remove(position);
                                                } else {
                                                    current.push(toggle_target.clone());
                                                }
                                                categories.set(current);
                                                expanded.set(Vec::new());
                                            },
                                            "{category}"
                                        }
                                    }
                                }
                            }
                        }
                        input {
                            class: "command-search",
                            placeholder: "Search commands...",
                            value: "{query}",
                            oninput: move |evt| {
                                query.set(evt.value());
                                expanded.set(Vec::new());
                            },
                        }
                        if filtered.is_empty() {
                            div {
                                class: "commands-empty",
                                "No commands found! Try clearing categories or try a different search query."
                            }
                        }
                        for command in filtered {
                            CommandInfo {
                                command,
                                prefix: prefix(),
                                expanded,
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Title { "{SITE_NAME}: Commands" }
        {body}
    }
}

#[component]
fn CommandInfo(command: CommandDto, prefix: String, mut expanded: Signal<Vec<String>>) -> Element {
    let selected = expanded().contains(&command.name);
    let toggle_target = command.name.clone();
    let description = render_description(&command.description, &prefix);
    let info_class = if selected {
        "command-info command-selected"
    } else {
        "command-info"
    };
    let cooldown = command.cooldown.clone().map(|cooldown| {
        format!(
            "{} {} per {}, per {}",
            cooldown.rate,
            if cooldown.rate == 1 { "time" } else { "times" },
            cooldown.per_humanized,
            cooldown.bucket,
        )
    });

    rsx! {
        div {
            class: "{info_class}",
            onclick: move |_| {
                let mut current = expanded();
                if let Some(position) = current.iter().position(|name| name == &toggle_target) {
                    current.remove(position);
                } else {
                    current.push(toggle_target.clone());
                }
                expanded.set(current);
            },
            div { class: "command-category", "{command.category.to_uppercase()}" }
            div {
                class: "command-signature",
                span { class: "command-prefix", "{prefix}" }
                span { "{command.name}" }
                for arg in command.signature.clone() {
                    {
                        let display = arg
                            .choices
                            .as_ref()
                            .map(|choices| choices.join(" | "))
                            .unwrap_or_else(|| arg.name.clone());
                        let hint = if arg.required {
                            "Required".to_string()
                        } else if let Some(default) = &arg.default {
                            format!("Default: {}", default)
                        } else {
                            "Optional".to_string()
                        };
                        let part_class = if arg.required {
                            "signature-part signature-required"
                        } else {
                            "signature-part signature-optional"
                        };
                        rsx! {
                            span { class: "{part_class}", title: "{hint}", "{display}" }
                        }
                    }
                }
            }
            if selected && !command.aliases.is_empty() {
                div {
                    class: "command-aliases",
                    b { "ALIASES: " }
                    "{command.aliases.join(\", \")}"
                }
            }
            if selected {
                if let Some(cooldown) = cooldown {
                    div {
                        class: "command-aliases",
                        b { "COOLDOWN: " }
                        "{cooldown}"
                    }
                }
            }
            div {
                class: "command-description",
                dangerous_inner_html: "{description}",
            }
            if selected && !command.arguments.is_empty() {
                h3 { class: "command-section", "Arguments" }
                for (name, text) in command.arguments.clone() {
                    {
                        let rendered = render_description(&text, &prefix);
                        rsx! {
                            span {
                                class: "command-argument",
                                b { "{name}: " }
                                span { dangerous_inner_html: "{rendered}" }
                            }
                        }
                    }
                }
            }
            if selected && !command.flags.is_empty() {
                h3 { class: "command-section", "Flags" }
                for (name, text) in command.flags.clone() {
                    {
                        let rendered = render_description(&text, &prefix);
                        rsx! {
                            span {
                                class: "command-argument",
                                b { "--{name}: " }
                                span { dangerous_inner_html: "{rendered}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
