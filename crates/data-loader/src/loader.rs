//! Fail-soft dataset loading.
//!
//! The web handler reloads the table on every request and must always be
//! able to render a page, so a broken file degrades to an empty table
//! instead of an error.

use crate::parser;
use crate::types::Movie;
use std::path::Path;
use tracing::{debug, warn};

/// Load the full movie table from `path`.
///
/// Returns an empty Vec on any file-level failure and logs the cause. Callers
/// treat an empty table as a valid (if unhelpful) result.
pub fn load_movies(path: &Path) -> Vec<Movie> {
    match parser::parse_movies(path) {
        Ok(movies) => {
            let incomplete = movies.iter().filter(|m| m.has_missing_values()).count();
            debug!(
                "Loaded {} movies from {} ({} with missing rating or votes)",
                movies.len(),
                path.display(),
                incomplete
            );
            movies
        }
        Err(e) => {
            warn!("Error loading movies from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
