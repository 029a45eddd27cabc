use super::{normalize_glyph, normalize_name};
use crate::error::{LookupError, LookupResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, trace};

const BUNDLED_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/emoji.json"));

/// `:name:` tokens as accepted by `emojify`.
const SHORTCODE_PATTERN: &str = r":([\w\-+]+):";

static BUNDLED: Lazy<Result<Dataset, String>> =
    Lazy::new(|| Dataset::from_json(BUNDLED_JSON).map_err(|e| e.to_string()));

#[derive(Debug, Deserialize)]
struct RawEntry {
    emoji: String,
    names: Vec<String>,
}

/// One glyph and every name it is known by. The first name is the primary one.
#[derive(Debug, Clone)]
pub struct Entry {
    pub glyph: String,
    pub names: Vec<String>,
}

impl Entry {
    pub fn primary_name(&self) -> &str {
        &self.names[0]
    }
}

/// An indexed emoji dataset.
///
/// Built once from JSON of the form `[{"emoji": "🍕", "names": ["pizza"]}, ...]`.
/// Construction rejects entries without names, empty glyphs, and names or glyphs
/// that appear twice, so every lookup is unambiguous.
#[derive(Debug)]
pub struct Dataset {
    entries: Vec<Entry>,
    /// Every name in dataset order, with the index of its entry.
    names: Vec<(String, usize)>,
    by_name: HashMap<String, usize>,
    /// Keyed by the normalized glyph.
    by_glyph: HashMap<String, usize>,
    glyph_pattern: Option<Regex>,
    shortcode_pattern: Regex,
}

impl Dataset {
    /// The dataset compiled into the binary, parsed on first use.
    pub fn bundled() -> LookupResult<&'static Dataset> {
        BUNDLED
            .as_ref()
            .map_err(|reason| LookupError::Dataset(reason.clone()))
    }

    pub fn from_json(raw: &str) -> LookupResult<Self> {
        let raw_entries: Vec<RawEntry> = serde_json::from_str(raw)
            .map_err(|e| LookupError::Dataset(format!("invalid JSON: {}", e)))?;

        let mut entries = Vec::with_capacity(raw_entries.len());
        let mut names = Vec::new();
        let mut by_name = HashMap::new();
        let mut by_glyph = HashMap::new();

        for (index, raw_entry) in raw_entries.into_iter().enumerate() {
            let normalized = normalize_glyph(&raw_entry.emoji);
            if normalized.is_empty() {
                return Err(LookupError::Dataset(format!(
                    "entry {} has an empty glyph",
                    index
                )));
            }
            if raw_entry.names.is_empty() {
                return Err(LookupError::Dataset(format!(
                    "`{}` has no names",
                    raw_entry.emoji
                )));
            }
            if by_glyph.insert(normalized, index).is_some() {
                return Err(LookupError::Dataset(format!(
                    "duplicate glyph `{}`",
                    raw_entry.emoji
                )));
            }
            for name in &raw_entry.names {
                if name.is_empty() || name.contains(':') {
                    return Err(LookupError::Dataset(format!(
                        "invalid name {:?} for `{}`",
                        name, raw_entry.emoji
                    )));
                }
                if by_name.insert(name.clone(), index).is_some() {
                    return Err(LookupError::Dataset(format!("duplicate name `{}`", name)));
                }
                names.push((name.clone(), index));
            }
            entries.push(Entry {
                glyph: raw_entry.emoji,
                names: raw_entry.names,
            });
        }

        let glyph_pattern = build_glyph_pattern(&entries)?;
        let shortcode_pattern =
            Regex::new(SHORTCODE_PATTERN).map_err(|e| LookupError::Dataset(e.to_string()))?;

        debug!(
            entries = entries.len(),
            names = names.len(),
            "emoji dataset indexed"
        );

        Ok(Self {
            entries,
            names,
            by_name,
            by_glyph,
            glyph_pattern,
            shortcode_pattern,
        })
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of names, aliases included.
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// `(name, glyph)` pairs in dataset order, one per name.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.names
            .iter()
            .map(|(name, index)| (name.as_str(), self.entries[*index].glyph.as_str()))
    }

    pub fn pair_at(&self, position: usize) -> Option<(&str, &str)> {
        self.names
            .get(position)
            .map(|(name, index)| (name.as_str(), self.entries[*index].glyph.as_str()))
    }

    /// Entry for a bare or colon-wrapped name.
    pub fn by_name(&self, name: &str) -> Option<&Entry> {
        let name = normalize_name(name);
        let found = self.by_name.get(name).map(|index| &self.entries[*index]);
        trace!(query = name, found = found.is_some(), "name lookup");
        found
    }

    /// Entry for a glyph, ignoring variation selectors.
    pub fn by_glyph(&self, glyph: &str) -> Option<&Entry> {
        self.by_glyph
            .get(&normalize_glyph(glyph))
            .map(|index| &self.entries[*index])
    }

    /// Matches any known glyph, longest first, tolerating U+FE0F after each
    /// code point. `None` for an empty dataset.
    pub fn glyph_pattern(&self) -> Option<&Regex> {
        self.glyph_pattern.as_ref()
    }

    pub fn shortcode_pattern(&self) -> &Regex {
        &self.shortcode_pattern
    }
}

fn build_glyph_pattern(entries: &[Entry]) -> LookupResult<Option<Regex>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut glyphs: Vec<String> = entries.iter().map(|e| normalize_glyph(&e.glyph)).collect();
    // Leftmost-first alternation: longer sequences must come before their prefixes.
    glyphs.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let alternatives: Vec<String> = glyphs
        .iter()
        .map(|glyph| {
            glyph
                .chars()
                .map(|c| format!("{}\\x{{FE0F}}?", regex::escape(&c.to_string())))
                .collect()
        })
        .collect();

    Regex::new(&alternatives.join("|"))
        .map(Some)
        .map_err(|e| LookupError::Dataset(format!("glyph pattern: {}", e)))
}
