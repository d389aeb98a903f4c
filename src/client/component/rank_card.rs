use dioxus::prelude::*;

use crate::model::rank_card::{css_color, RankCardConfigDto};

/// SVG preview of a rank card, mirroring the geometry the bot renders
/// into its level-up images.
#[component]
pub fn RankCard(
    username: String,
    discriminator: String,
    avatar_url: String,
    rank: u32,
    level: u32,
    xp: u32,
    max_xp: u32,
    config: RankCardConfigDto,
) -> Element {
    let background = css_color(config.background_color);
    let overlay = css_color(config.overlay_color);
    let avatar_border = css_color(config.avatar_border_color);
    let progress_bar = css_color(config.progress_bar_color);
    let primary = css_color(config.primary_color);
    let secondary = css_color(config.secondary_color);
    let tertiary = css_color(config.tertiary_color);

    // Progress fill spans the bar's 694px interior, with a minimum nub so
    // zero XP still renders a rounded cap.
    let ratio = (xp as f64 / max_xp.max(1) as f64).clamp(0.0, 1.0);
    let fill_width = format!("{:.0}", 50.0 + 644.0 * ratio);

    rsx! {
        svg {
            class: "rank-card",
            xmlns: "http://www.w3.org/2000/svg",
            width: "1390",
            height: "600",
            view_box: "0 0 1390 600",
            fill: "none",
            rect { width: "1390", height: "600", fill: "{background}" }
            if let Some(url) = config.background_url.clone() {
                image {
                    x: "-15",
                    y: "-15",
                    width: "1420",
                    height: "640",
                    href: "{url}",
                    style: "opacity: {config.background_image_alpha}; filter: blur({config.background_blur}px)",
                }
            }
            g {
                rect {
                    x: "70",
                    y: "70",
                    width: "1250",
                    height: "460",
                    rx: "{config.overlay_border_radius}",
                    fill: "{overlay}",
                    style: "opacity: {config.overlay_alpha}",
                }
                rect {
                    x: "104",
                    y: "95",
                    width: "316",
                    height: "316",
                    rx: "{config.avatar_border_radius + 14.0}",
                    fill: "{avatar_border}",
                    style: "opacity: {config.avatar_border_alpha}",
                }
                image {
                    x: "123",
                    y: "114",
                    width: "278",
                    height: "278",
                    href: "{avatar_url}",
                }
                rect {
                    x: "463",
                    y: "342",
                    width: "718",
                    height: "74",
                    rx: "37",
                    fill: "{progress_bar}",
                    style: "opacity: {config.progress_bar_alpha}",
                }
                rect {
                    x: "475",
                    y: "354",
                    width: "{fill_width}",
                    height: "50",
                    rx: "25",
                    fill: "{tertiary}",
                }
                text {
                    x: "476",
                    y: "312.5",
                    fill: "{primary}",
                    font_size: "55",
                    tspan { "{username}" }
                    tspan { fill: "{secondary}", font_size: "50", "#{discriminator}" }
                }
                text {
                    x: "262",
                    y: "480.273",
                    fill: "{secondary}",
                    font_size: "53",
                    text_anchor: "middle",
                    tspan { "Level " }
                    tspan { fill: "{primary}", "{level}" }
                }
                text {
                    x: "1236",
                    y: "173.318",
                    fill: "{primary}",
                    font_size: "60",
                    text_anchor: "end",
                    tspan { fill: "{secondary}", font_size: "45", "RANK " }
                    tspan { "#{rank}" }
                }
                text {
                    x: "476",
                    y: "466.091",
                    fill: "{primary}",
                    font_size: "36",
                    tspan { "{xp} XP" }
                    tspan { fill: "{secondary}", font_size: "33", " / {max_xp}" }
                }
            }
        }
    }
}
