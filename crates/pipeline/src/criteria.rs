//! User-supplied filter criteria.

use serde::{Deserialize, Serialize};

/// Optional constraints narrowing the movie table before ranking.
///
/// Every field is independent; `None` means "no constraint on this
/// dimension". Genre terms are stored trimmed and a blank term is the same as
/// no term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub genre1: Option<String>,
    pub genre2: Option<String>,
}

impl FilterCriteria {
    /// Criteria with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_max_rating(mut self, max_rating: f64) -> Self {
        self.max_rating = Some(max_rating);
        self
    }

    pub fn with_genre1(mut self, term: impl AsRef<str>) -> Self {
        self.genre1 = normalize_term(term.as_ref());
        self
    }

    pub fn with_genre2(mut self, term: impl AsRef<str>) -> Self {
        self.genre2 = normalize_term(term.as_ref());
        self
    }

    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.min_rating.is_none() && self.max_rating.is_none() && self.genre_terms().next().is_none()
    }

    /// The non-blank genre terms, trimmed, in order.
    ///
    /// The fields are public and deserializable, so they may hold padded or
    /// blank terms that bypassed the builders; those are normalised here.
    pub fn genre_terms(&self) -> impl Iterator<Item = &str> {
        [self.genre1.as_deref(), self.genre2.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// Trim a genre term; blank terms impose no constraint.
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
