use super::{normalize_name, Dataset, EmojiLookup};
use crate::error::{LookupError, LookupResult};
use crate::model::Emoji;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Captures;
use std::cell::RefCell;
use tracing::debug;

/// The emoji-lookup library over a [`Dataset`].
pub struct EmojiLibrary<'d> {
    dataset: &'d Dataset,
    /// One library per invocation, never shared across threads.
    rng: RefCell<StdRng>,
}

impl EmojiLibrary<'static> {
    /// Library over the bundled dataset. `seed` makes `random` reproducible.
    pub fn bundled(seed: Option<u64>) -> LookupResult<Self> {
        Ok(Self::with_seed(Dataset::bundled()?, seed))
    }
}

impl<'d> EmojiLibrary<'d> {
    pub fn new(dataset: &'d Dataset) -> Self {
        Self::with_seed(dataset, None)
    }

    pub fn with_seed(dataset: &'d Dataset, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!(seed, "seeding random source");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self {
            dataset,
            rng: RefCell::new(rng),
        }
    }

    /// Primary name for a glyph, as `:name:` when `markdown` is set.
    pub fn which(&self, glyph: &str, markdown: bool) -> Option<String> {
        self.dataset.by_glyph(glyph).map(|entry| {
            if markdown {
                format!(":{}:", entry.primary_name())
            } else {
                entry.primary_name().to_string()
            }
        })
    }
}

impl EmojiLookup for EmojiLibrary<'_> {
    fn search(&self, query: &str) -> LookupResult<Vec<Emoji>> {
        let needle = normalize_name(query);
        let results: Vec<Emoji> = self
            .dataset
            .pairs()
            .filter(|(name, _)| name.contains(needle))
            .map(|(name, glyph)| Emoji::named(glyph, name))
            .collect();

        debug!(query, matches = results.len(), "search");
        Ok(results)
    }

    fn emojify(&self, text: &str) -> LookupResult<String> {
        let replaced = self
            .dataset
            .shortcode_pattern()
            .replace_all(text, |caps: &Captures| match self.dataset.by_name(&caps[1]) {
                Some(entry) => entry.glyph.clone(),
                None => caps[0].to_string(),
            });
        Ok(replaced.into_owned())
    }

    fn unemojify(&self, text: &str) -> LookupResult<String> {
        let Some(pattern) = self.dataset.glyph_pattern() else {
            return Ok(text.to_string());
        };
        let replaced = pattern.replace_all(text, |caps: &Captures| {
            self.which(&caps[0], true)
                .unwrap_or_else(|| caps[0].to_string())
        });
        Ok(replaced.into_owned())
    }

    fn get(&self, name: &str) -> LookupResult<Option<String>> {
        Ok(self.dataset.by_name(name).map(|entry| entry.glyph.clone()))
    }

    fn has(&self, name_or_glyph: &str) -> LookupResult<bool> {
        Ok(self.dataset.by_name(name_or_glyph).is_some()
            || self.dataset.by_glyph(name_or_glyph).is_some())
    }

    fn find(&self, name_or_glyph: &str) -> LookupResult<Option<Emoji>> {
        if let Some(entry) = self.dataset.by_name(name_or_glyph) {
            return Ok(Some(Emoji::keyed(
                entry.glyph.clone(),
                normalize_name(name_or_glyph),
            )));
        }
        Ok(self
            .dataset
            .by_glyph(name_or_glyph)
            .map(|entry| Emoji::keyed(entry.glyph.clone(), entry.primary_name())))
    }

    fn random(&self) -> LookupResult<Emoji> {
        let count = self.dataset.name_count();
        if count == 0 {
            return Err(LookupError::EmptyDataset);
        }
        let position = self.rng.borrow_mut().gen_range(0..count);
        self.dataset
            .pair_at(position)
            .map(|(name, glyph)| Emoji::named(glyph, name))
            .ok_or(LookupError::EmptyDataset)
    }
}
