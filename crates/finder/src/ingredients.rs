//! The ingredient list a user is building before searching

use recipegen_core::recipe::{normalize, IngredientName};
use recipegen_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Normalize raw input, dropping blanks and repeats (first occurrence wins)
pub fn dedupe_tokens<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(|value| normalize(value.as_ref()))
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Ordered, duplicate-free ingredient tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientList {
    items: Vec<IngredientName>,
}

impl IngredientList {
    /// Empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw input, skipping blanks and repeats
    pub fn from_raw<S: AsRef<str>>(raw: &[S]) -> Self {
        let items = dedupe_tokens(raw)
            .iter()
            .filter_map(|token| IngredientName::parse(token).ok())
            .collect();
        Self { items }
    }

    /// Add an ingredient.
    ///
    /// Returns `Ok(false)` when it is already listed; blank input is an error.
    pub fn add(&mut self, raw: &str) -> Result<bool> {
        let name = IngredientName::parse(raw)?;
        if self.contains(name.as_str()) {
            return Ok(false);
        }
        self.items.push(name);
        Ok(true)
    }

    /// Remove an ingredient; true if it was listed
    pub fn remove(&mut self, raw: &str) -> bool {
        let token = normalize(raw);
        let before = self.items.len();
        self.items.retain(|name| name.as_str() != token);
        self.items.len() != before
    }

    /// Swap an ingredient for a chosen suggestion, keeping its position.
    ///
    /// If the replacement is already listed the old entry is just removed.
    pub fn replace(&mut self, original: &str, replacement: &str) -> Result<()> {
        let original = normalize(original);
        let replacement = IngredientName::parse(replacement)?;

        let Some(index) = self.items.iter().position(|name| name.as_str() == original) else {
            return Err(Error::validation(format!("'{original}' is not in the ingredient list")));
        };

        if replacement.as_str() != original && self.contains(replacement.as_str()) {
            self.items.remove(index);
        } else {
            self.items[index] = replacement;
        }
        Ok(())
    }

    /// True if the normalized token is listed
    pub fn contains(&self, raw: &str) -> bool {
        let token = normalize(raw);
        self.items.iter().any(|name| name.as_str() == token)
    }

    /// Tokens in insertion order
    pub fn tokens(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }

    /// Iterate over the tokens
    pub fn iter(&self) -> impl Iterator<Item = &IngredientName> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
