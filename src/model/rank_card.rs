use serde::{Deserialize, Serialize};

/// Visual configuration of a user's rank card, as stored by
/// `GET /rank-card/{user_id}`. Colors are packed RGB integers.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankCardConfigDto {
    pub font: String,
    pub primary_color: u32,
    pub secondary_color: u32,
    pub tertiary_color: u32,
    #[serde(default)]
    pub background_url: Option<String>,
    pub background_color: u32,
    pub background_image_alpha: f64,
    pub background_blur: f64,
    pub overlay_color: u32,
    pub overlay_alpha: f64,
    pub overlay_border_radius: f64,
    pub avatar_border_color: u32,
    pub avatar_border_alpha: f64,
    pub avatar_border_radius: f64,
    pub progress_bar_color: u32,
    pub progress_bar_alpha: f64,
}

/// Partial update for `PATCH /rank-card/{user_id}`. Unset fields are left
/// untouched by the backend.
#[derive(Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RankCardPatchDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tertiary_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_border_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_border_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_bar_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_bar_alpha: Option<f64>,
}

/// Formats a packed RGB integer as a CSS hex color.
pub fn css_color(value: u32) -> String {
    format!("#{:06x}", value & 0xffffff)
}

/// Parses a `#rrggbb` CSS color back into a packed RGB integer.
pub fn parse_css_color(value: &str) -> Option<u32> {
    u32::from_str_radix(value.trim_start_matches('#'), 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pads_css_colors() {
        assert_eq!(css_color(0xffffff), "#ffffff");
        assert_eq!(css_color(0x00ff00), "#00ff00");
        assert_eq!(css_color(0x1), "#000001");
    }

    #[test]
    fn parses_css_colors_back() {
        assert_eq!(parse_css_color("#ff00aa"), Some(0xff00aa));
        assert_eq!(parse_css_color("0000ff"), Some(0xff));
        assert_eq!(parse_css_color("#not-a-color"), None);
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = RankCardPatchDto {
            primary_color: Some(0xffffff),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"primaryColor":16777215}"#
        );
    }

    #[test]
    fn config_round_trips_camel_case_keys() {
        let raw = r#"{
            "font": "Inter",
            "primaryColor": 16777215,
            "secondaryColor": 11184810,
            "tertiaryColor": 5793266,
            "backgroundColor": 1973790,
            "backgroundImageAlpha": 0.8,
            "backgroundBlur": 4.0,
            "overlayColor": 2171169,
            "overlayAlpha": 0.85,
            "overlayBorderRadius": 20.0,
            "avatarBorderColor": 5793266,
            "avatarBorderAlpha": 1.0,
            "avatarBorderRadius": 70.0,
            "progressBarColor": 2171169,
            "progressBarAlpha": 0.9
        }"#;
        let config: RankCardConfigDto = serde_json::from_str(raw).unwrap();
        assert_eq!(config.font, "Inter");
        assert_eq!(config.background_url, None);

        let out = serde_json::to_string(&config).unwrap();
        assert!(out.contains(r#""overlayBorderRadius":20.0"#));
    }
}
