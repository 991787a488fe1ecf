//! Filter to keep only movies whose genre mentions a term.
//!
//! Genres are stored as one delimited string ("Crime, Drama, Mystery"), so
//! matching is plain substring containment rather than label equality.

use crate::traits::Filter;
use data_loader::Movie;

/// Keeps movies whose genre string contains `term`, ignoring case.
///
/// ## Algorithm
/// 1. Lowercase the term once at construction
/// 2. For each movie, lowercase the genre string and test containment
pub struct GenreFilter {
    lowercase_term: String,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `term` - Substring to look for, e.g. "sci-fi" or "Drama"
    pub fn new(term: impl AsRef<str>) -> Self {
        Self {
            lowercase_term: term.as_ref().to_lowercase(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
        movies
            .into_iter()
            .filter(|movie| movie.genre_contains_lowercase(&self.lowercase_term))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_movies() -> Vec<Movie> {
        vec![
            Movie::new("Zodiac", "Crime, Drama, Mystery", 7.7, 500_000),
            Movie::new("Airplane!", "Comedy", 7.7, 230_000),
            Movie::new("Blade Runner", "Action, Drama, Sci-Fi", 8.1, 740_000),
        ]
    }

    #[test]
    fn test_genre_filter_is_case_insensitive() {
        let filtered = GenreFilter::new("drama").apply(create_test_movies());

        let titles: Vec<&str> = filtered.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Zodiac", "Blade Runner"]);
    }

    #[test]
    fn test_genre_filter_matches_substrings() {
        let filtered = GenreFilter::new("SCI").apply(create_test_movies());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Blade Runner");
    }

    #[test]
    fn test_genre_filter_is_not_a_pattern() {
        // "." must match a literal dot, not any character
        assert!(GenreFilter::new("c.medy").apply(create_test_movies()).is_empty());
    }
}
