use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The command index served by `GET /commands`, keyed by category.
pub type CommandIndexDto = BTreeMap<String, Vec<CommandDto>>;

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct CommandDto {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub signature: Vec<CommandArgDto>,
    /// Argument name -> description, rendered in the expanded view.
    #[serde(default)]
    pub arguments: BTreeMap<String, String>,
    /// Flag name (without the leading `--`) -> description.
    #[serde(default)]
    pub flags: BTreeMap<String, String>,
    #[serde(default)]
    pub cooldown: Option<CommandCooldownDto>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct CommandArgDto {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub choices: Option<Vec<String>>,
    #[serde(default)]
    pub store_true: bool,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct CommandCooldownDto {
    pub rate: u32,
    pub per_humanized: String,
    /// Cooldown bucket ("user", "channel", ...).
    #[serde(rename = "type")]
    pub bucket: String,
}

impl CommandDto {
    /// Search predicate used by the command list page. `query` must
    /// already be lowercased; an empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }

        let name = self.name.to_lowercase();
        if name.starts_with(query) {
            return true;
        }
        if let Some(last) = name.split(' ').next_back() {
            if query.contains(last) {
                return true;
            }
        }
        if name.split(' ').any(|word| word.starts_with(query)) {
            return true;
        }
        self.aliases.iter().any(|alias| {
            let alias = alias.to_lowercase();
            alias.starts_with(query) || query.contains(alias.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str, aliases: &[&str]) -> CommandDto {
        CommandDto {
            name: name.to_string(),
            aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
            category: "misc".to_string(),
            description: "Does things.".to_string(),
            signature: Vec::new(),
            arguments: BTreeMap::new(),
            flags: BTreeMap::new(),
            cooldown: None,
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(command("ping", &[]).matches(""));
    }

    #[test]
    fn matches_on_name_prefix_and_subcommand_words() {
        let subject = command("config prefix", &[]);
        assert!(subject.matches("conf"));
        assert!(subject.matches("pre"));
        assert!(!subject.matches("rank"));
    }

    #[test]
    fn matches_on_aliases() {
        let subject = command("leaderboard", &["lb", "top"]);
        assert!(subject.matches("lb"));
        assert!(subject.matches("top"));
    }

    #[test]
    fn cooldown_bucket_uses_wire_type_key() {
        let raw = r#"{
            "name": "ping",
            "category": "misc",
            "description": "Pong.",
            "cooldown": {"rate": 2, "per_humanized": "5 seconds", "type": "user"}
        }"#;
        let parsed: CommandDto = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.cooldown.unwrap().bucket, "user");
    }
}
