use serde::{Deserialize, Serialize};

/// Guild summary as returned by `GET /discord/guilds`, annotated by the
/// backend with whether the dashboard can be opened for it.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct GuildDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub owner: bool,
    /// Permission bitfield, stringified by the Discord API.
    pub permissions: String,
    pub features: Vec<String>,
    #[serde(
        serialize_with = "serialize_status_as_u8",
        deserialize_with = "deserialize_status_from_u8"
    )]
    pub status: GuildStatus,
}

/// Whether the dashboard can be opened for a guild. Ordered so that
/// sorting descending puts available guilds first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum GuildStatus {
    /// The bot is not a member of this guild.
    NotInvited,
    /// The bot is present but the user lacks management permissions.
    NoPermissions,
    /// The dashboard can be opened.
    Available,
}

impl GuildStatus {
    pub fn as_u8(self) -> u8 {
        match self {
            GuildStatus::NotInvited => 0,
            GuildStatus::NoPermissions => 1,
            GuildStatus::Available => 2,
        }
    }
}

fn serialize_status_as_u8<S>(value: &GuildStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u8(value.as_u8())
}

fn deserialize_status_from_u8<'de, D>(deserializer: D) -> Result<GuildStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    match u8::deserialize(deserializer)? {
        0 => Ok(GuildStatus::NotInvited),
        1 => Ok(GuildStatus::NoPermissions),
        2 => Ok(GuildStatus::Available),
        other => Err(D::Error::custom(format!(
            "invalid guild status: {}",
            other
        ))),
    }
}

impl GuildDto {
    /// CDN URL for the guild icon, falling back to the default embed avatar.
    pub fn icon_url(&self) -> String {
        match &self.icon {
            Some(hash) => format!(
                "https://cdn.discordapp.com/icons/{}/{}.{}",
                self.id,
                hash,
                if hash.starts_with("a_") { "gif" } else { "png" }
            ),
            None => "https://cdn.discordapp.com/embed/avatars/0.png".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guild(status: &str) -> String {
        format!(
            r#"{{"id":"1","name":"g","owner":true,"permissions":"8","features":[],"status":{}}}"#,
            status
        )
    }

    #[test]
    fn deserializes_status_from_wire_integer() {
        let parsed: GuildDto = serde_json::from_str(&guild("0")).unwrap();
        assert_eq!(parsed.status, GuildStatus::NotInvited);
        let parsed: GuildDto = serde_json::from_str(&guild("2")).unwrap();
        assert_eq!(parsed.status, GuildStatus::Available);
    }

    #[test]
    fn rejects_unknown_status_values() {
        assert!(serde_json::from_str::<GuildDto>(&guild("3")).is_err());
    }

    #[test]
    fn serializes_status_back_to_wire_integer() {
        let parsed: GuildDto = serde_json::from_str(&guild("1")).unwrap();
        let raw = serde_json::to_string(&parsed).unwrap();
        assert!(raw.contains(r#""status":1"#));
    }

    #[test]
    fn orders_available_guilds_first_when_sorted_descending() {
        let mut statuses = [
            GuildStatus::NoPermissions,
            GuildStatus::Available,
            GuildStatus::NotInvited,
        ];
        statuses.sort_by_key(|status| std::cmp::Reverse(*status));
        assert_eq!(statuses[0], GuildStatus::Available);
        assert_eq!(statuses[2], GuildStatus::NotInvited);
    }

    #[test]
    fn animated_icons_resolve_to_gif() {
        let mut parsed: GuildDto = serde_json::from_str(&guild("2")).unwrap();
        parsed.icon = Some("a_hash".to_string());
        assert_eq!(
            parsed.icon_url(),
            "https://cdn.discordapp.com/icons/1/a_hash.gif"
        );

        parsed.icon = None;
        assert_eq!(
            parsed.icon_url(),
            "https://cdn.discordapp.com/embed/avatars/0.png"
        );
    }
}
