use serde::{Deserialize, Serialize};

/// Discord user profile as proxied by the backend's `GET /users/@me`.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub discriminator: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub mfa_enabled: Option<bool>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub flags: Option<u64>,
    #[serde(default)]
    pub premium_type: Option<u64>,
    #[serde(default)]
    pub public_flags: u64,
}

impl UserDto {
    /// CDN URL for the user's avatar, falling back to one of the five
    /// default embed avatars derived from the discriminator.
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!(
                "https://cdn.discordapp.com/avatars/{}/{}.{}",
                self.id,
                hash,
                if hash.starts_with("a_") { "gif" } else { "png" }
            ),
            None => {
                let index = self.discriminator.parse::<u64>().unwrap_or(0) % 5;
                format!("https://cdn.discordapp.com/embed/avatars/{}.png", index)
            }
        }
    }

    pub fn tag(&self) -> String {
        format!("{}#{}", self.username, self.discriminator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(avatar: Option<&str>, discriminator: &str) -> UserDto {
        serde_json::from_str(&format!(
            r#"{{"id":"42","username":"tester","discriminator":"{}","avatar":{},"public_flags":0}}"#,
            discriminator,
            avatar
                .map(|hash| format!(r#""{}""#, hash))
                .unwrap_or_else(|| "null".to_string()),
        ))
        .unwrap()
    }

    #[test]
    fn static_avatars_resolve_to_png() {
        assert_eq!(
            user(Some("abcd"), "0001").avatar_url(),
            "https://cdn.discordapp.com/avatars/42/abcd.png"
        );
    }

    #[test]
    fn animated_avatars_resolve_to_gif() {
        assert_eq!(
            user(Some("a_bcd"), "0001").avatar_url(),
            "https://cdn.discordapp.com/avatars/42/a_bcd.gif"
        );
    }

    #[test]
    fn missing_avatars_fall_back_to_discriminator_derived_default() {
        assert_eq!(
            user(None, "0006").avatar_url(),
            "https://cdn.discordapp.com/embed/avatars/1.png"
        );
    }
}
