/// Fallback shown when a record carries neither a name nor a key.
pub const UNKNOWN_NAME: &str = "unknown";

/// A single emoji as returned by the lookup layer.
///
/// Search and random results are labelled with `name`; find results are
/// labelled with the `key` they were found under. Callers that only want a
/// label should use [`Emoji::display_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    pub emoji: String,
    pub name: Option<String>,
    pub key: Option<String>,
}

impl Emoji {
    pub fn named(emoji: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            name: Some(name.into()),
            key: None,
        }
    }

    pub fn keyed(emoji: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            name: None,
            key: Some(key.into()),
        }
    }

    /// Name, falling back to key, falling back to `"unknown"`.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.key.as_deref().filter(|k| !k.is_empty()))
            .unwrap_or(UNKNOWN_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_name_then_key() {
        assert_eq!(Emoji::named("🍕", "pizza").display_name(), "pizza");
        assert_eq!(Emoji::keyed("🍕", "pizza").display_name(), "pizza");

        let both = Emoji {
            emoji: "👍".into(),
            name: Some("+1".into()),
            key: Some("thumbsup".into()),
        };
        assert_eq!(both.display_name(), "+1");
    }

    #[test]
    fn display_name_falls_back_to_unknown() {
        let bare = Emoji {
            emoji: "❓".into(),
            name: None,
            key: Some(String::new()),
        };
        assert_eq!(bare.display_name(), UNKNOWN_NAME);
    }
}
