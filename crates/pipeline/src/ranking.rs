//! Scoring and ranking of filtered movies.
//!
//! The score is a linear blend of the rating and the vote count, with votes
//! normalised to millions:
//!
//! ```text
//! score = 1.0 * rating + 0.3 * (vote_count / 1_000_000)
//! ```
//!
//! Ranking is one stable sort by descending score. Movies with a missing
//! rating or vote count have no score and sink below every scored movie,
//! keeping their input order.

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use data_loader::Movie;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Weights of the linear score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub rating_weight: f64,
    pub votes_weight: f64,
    /// Vote counts are divided by this before weighting
    pub vote_normalizer: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rating_weight: 1.0,
            votes_weight: 0.3,
            vote_normalizer: 1_000_000.0,
        }
    }
}

impl ScoreWeights {
    /// Score a movie, or `None` if either input is missing.
    pub fn score(&self, movie: &Movie) -> Option<f64> {
        let rating = movie.rating?;
        let votes = movie.vote_count? as f64;
        Some(self.rating_weight * rating + self.votes_weight * (votes / self.vote_normalizer))
    }
}

/// A movie together with the score that placed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMovie {
    pub movie: Movie,
    pub score: Option<f64>,
}

/// Descending by score; unscored after scored.
fn compare_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order movies by descending score.
///
/// Rust concept: `sort_by` is a stable sort, so equal scores keep the input
/// order without an explicit tiebreak key.
pub fn rank_movies(movies: Vec<Movie>, weights: &ScoreWeights) -> Vec<RankedMovie> {
    let mut ranked: Vec<RankedMovie> = movies
        .into_iter()
        .map(|movie| RankedMovie {
            score: weights.score(&movie),
            movie,
        })
        .collect();

    ranked.sort_by(|a, b| compare_scores(a.score, b.score));
    ranked
}

/// Apply every present constraint in `criteria`, then rank with the default
/// weights.
pub fn filter_and_rank(movies: Vec<Movie>, criteria: &FilterCriteria) -> Vec<RankedMovie> {
    let filtered = FilterPipeline::from_criteria(criteria).apply(movies);
    rank_movies(filtered, &ScoreWeights::default())
}
