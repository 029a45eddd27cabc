//! # Lookup Layer
//!
//! The emoji-lookup library the CLI delegates to. The [`EmojiLookup`] trait is
//! the seam between the two layers:
//!
//! - [`EmojiLibrary`]: production implementation over a [`Dataset`]
//! - test doubles in the CLI layer implement the trait to exercise failure paths
//!
//! ## Naming rules
//!
//! Names may be given bare (`pizza`) or in markdown form (`:pizza:`); the
//! surrounding colons are stripped before lookup. Glyph lookups ignore the
//! U+FE0F variation selector, so `❤` and `❤️` resolve to the same entry.

use crate::error::LookupResult;
use crate::model::Emoji;

pub mod dataset;
pub mod library;

pub use dataset::Dataset;
pub use library::EmojiLibrary;

/// Operations offered by an emoji-lookup library.
pub trait EmojiLookup {
    /// Every `(name, glyph)` pair whose name matches `query` as a regular expression.
    fn search(&self, query: &str) -> LookupResult<Vec<Emoji>>;

    /// Replaces `:name:` tokens with their glyphs; unknown tokens are left as-is.
    fn emojify(&self, text: &str) -> LookupResult<String>;

    /// Replaces known glyphs with their `:name:` token.
    fn unemojify(&self, text: &str) -> LookupResult<String>;

    /// Glyph for a name.
    fn get(&self, name: &str) -> LookupResult<Option<String>>;

    /// Whether a name or a glyph is known.
    fn has(&self, name_or_glyph: &str) -> LookupResult<bool>;

    /// Record for a name or a glyph, keyed by the matching name.
    fn find(&self, name_or_glyph: &str) -> LookupResult<Option<Emoji>>;

    /// A uniformly chosen `(name, glyph)` pair.
    fn random(&self) -> LookupResult<Emoji>;
}

/// Strips one pair of surrounding colons (`:pizza:` -> `pizza`).
pub fn normalize_name(name: &str) -> &str {
    match name.strip_prefix(':').and_then(|n| n.strip_suffix(':')) {
        Some(inner) if !inner.is_empty() => inner,
        _ => name,
    }
}

/// Drops U+FE0F variation selectors so presentation variants compare equal.
pub fn normalize_glyph(glyph: &str) -> String {
    glyph.chars().filter(|c| *c != VARIATION_SELECTOR_16).collect()
}

pub(crate) const VARIATION_SELECTOR_16: char = '\u{FE0F}';
