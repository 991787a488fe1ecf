//! # Ranking Orchestrator
//!
//! This module coordinates one request's worth of work:
//! 1. Reload the movie table from disk
//! 2. Apply the filters named by the criteria
//! 3. Score and rank the survivors
//!
//! Nothing is cached between requests. Each call reads the file again, so
//! concurrent requests never share mutable state.
//!
//! ## Learning Goals
//!
//! - Using spawn_blocking for synchronous file I/O and CPU-bound work
//! - Error handling across async boundaries
//! - Instrumentation and timing

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use data_loader::load_movies;
use pipeline::{FilterCriteria, RankedMovie, filter_and_rank};

/// Loads, filters and ranks the dataset on demand.
///
/// Rust concept: the path lives behind an `Arc` so cloning the orchestrator
/// into every handler is a reference-count bump.
#[derive(Debug, Clone)]
pub struct RankingOrchestrator {
    dataset_path: Arc<PathBuf>,
}

impl RankingOrchestrator {
    /// Create an orchestrator reading `dataset_path`.
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: Arc::new(dataset_path.into()),
        }
    }

    /// Main entry point: rank the table under `criteria`.
    ///
    /// A missing or malformed dataset yields an empty list, not an error.
    /// The only failure is the blocking task panicking.
    pub async fn rank(&self, criteria: FilterCriteria) -> Result<Vec<RankedMovie>> {
        let start_time = Instant::now();
        debug!("Ranking with criteria {:?}", criteria);

        let path = Arc::clone(&self.dataset_path);

        let (loaded, ranked) = tokio::task::spawn_blocking(move || {
            let movies = load_movies(&path);
            let loaded = movies.len();
            (loaded, filter_and_rank(movies, &criteria))
        })
        .await
        .context("Ranking task panicked")?;

        info!(
            "Ranked {} of {} movies in {:.2?}",
            ranked.len(),
            loaded,
            start_time.elapsed()
        );
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_dataset() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "title,genre,rating,vote_count").unwrap();
        writeln!(file, "B,Comedy,8.5,500000").unwrap();
        writeln!(file, "A,Drama,9.0,2000000").unwrap();
        writeln!(file, "C,\"Comedy, Drama\",7.0,100").unwrap();
        file
    }

    #[tokio::test]
    async fn test_rank_reloads_and_orders() {
        let file = write_dataset();
        let orchestrator = RankingOrchestrator::new(file.path());

        let ranked = orchestrator.rank(FilterCriteria::new()).await.unwrap();
        let titles: Vec<&str> = ranked.iter().map(|r| r.movie.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_rank_with_criteria() {
        let file = write_dataset();
        let orchestrator = RankingOrchestrator::new(file.path());

        let ranked = orchestrator
            .rank(FilterCriteria::new().with_genre1("comedy").with_max_rating(8.0))
            .await
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].movie.title, "C");
    }

    #[tokio::test]
    async fn test_missing_dataset_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let orchestrator = RankingOrchestrator::new(dir.path().join("missing.csv"));

        let ranked = orchestrator
            .rank(FilterCriteria::new().with_min_rating(5.0))
            .await
            .unwrap();
        assert!(ranked.is_empty());
    }
}
