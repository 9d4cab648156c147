//! Tiered scoring of a catalog name against a search term.

use crate::fuzzy::levenshtein_distance;

/// Largest edit distance still considered a near miss
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Both strings must be longer than this for a near miss to count
pub const MIN_FUZZY_LEN: usize = 3;

/// How a candidate matched the term. The first tier that applies wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Candidate equals term
    Exact,
    /// Candidate starts with term
    StartsWith,
    /// Candidate contains term
    Contains,
    /// Term contains candidate
    ContainedIn,
    /// Small edit distance between two reasonably long names
    NearMiss(usize),
}

impl MatchTier {
    /// Classify `candidate` against `term`. Both are compared as given;
    /// callers pass normalized (lower-case, trimmed) strings.
    pub fn classify(candidate: &str, term: &str) -> Option<Self> {
        if candidate == term {
            return Some(Self::Exact);
        }
        if candidate.starts_with(term) {
            return Some(Self::StartsWith);
        }
        if candidate.contains(term) {
            return Some(Self::Contains);
        }
        if term.contains(candidate) {
            return Some(Self::ContainedIn);
        }

        // length in chars, not bytes: "thé" is three long
        let shorter = candidate.chars().count().min(term.chars().count());
        if shorter <= MIN_FUZZY_LEN {
            return None;
        }

        let distance = levenshtein_distance(term, candidate);
        (distance <= MAX_EDIT_DISTANCE).then_some(Self::NearMiss(distance))
    }

    /// Numeric score (higher is better, always positive)
    pub fn score(self) -> u32 {
        match self {
            Self::Exact => 100,
            Self::StartsWith => 90,
            Self::Contains => 80,
            Self::ContainedIn => 70,
            // distance is at most MAX_EDIT_DISTANCE, so this stays in 40..=60
            Self::NearMiss(distance) => 60 - 10 * distance as u32,
        }
    }
}

/// Score of `candidate` for `term`, 0 when it does not match at all
pub fn calculate_relevance(candidate: &str, term: &str) -> u32 {
    MatchTier::classify(candidate, term).map_or(0, MatchTier::score)
}
