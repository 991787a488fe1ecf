//! Parser for the movie table.
//!
//! The table is a comma-delimited file with a header row, e.g. the IMDb
//! top-1000 export:
//!
//! ```text
//! Series_Title,Genre,IMDB_Rating,No_of_Votes
//! The Godfather,"Crime, Drama",9.2,1620367
//! ```
//!
//! Columns are located by header name, so their order does not matter and
//! extra columns are ignored. Numeric cells that do not parse become `None`
//! instead of failing the whole file.
//!
//! Rust concepts you'll learn here:
//! - Generic functions over `std::io::Read`
//! - Error handling with `?` and `#[from]` conversions
//! - `Option` combinators (`ok`, `filter`, `then_some`)

use crate::error::{DataLoadError, Result};
use crate::types::Movie;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

const TITLE_COLUMNS: &[&str] = &["title", "series_title"];
const GENRE_COLUMNS: &[&str] = &["genre", "genres"];
const RATING_COLUMNS: &[&str] = &["rating", "imdb_rating"];
const VOTE_COUNT_COLUMNS: &[&str] = &["vote_count", "votes", "no_of_votes"];

/// Positions of the four attributes we care about within a row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    title: usize,
    genre: usize,
    rating: usize,
    vote_count: usize,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            title: find_column(headers, "title", TITLE_COLUMNS)?,
            genre: find_column(headers, "genre", GENRE_COLUMNS)?,
            rating: find_column(headers, "rating", RATING_COLUMNS)?,
            vote_count: find_column(headers, "vote_count", VOTE_COUNT_COLUMNS)?,
        })
    }

    /// Build a Movie from one row. Short rows read missing cells as empty.
    fn movie_from(&self, record: &StringRecord) -> Movie {
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        Movie {
            title: cell(self.title).trim().to_string(),
            genre: cell(self.genre).trim().to_string(),
            rating: parse_rating(cell(self.rating)),
            vote_count: parse_vote_count(cell(self.vote_count)),
        }
    }
}

fn find_column(headers: &StringRecord, column: &'static str, aliases: &[&str]) -> Result<usize> {
    headers
        .iter()
        .position(|h| {
            let normalized = h.trim_start_matches('\u{feff}').trim().to_lowercase();
            aliases.contains(&normalized.as_str())
        })
        .ok_or(DataLoadError::MissingColumn { column })
}

/// Parse the movie table at `path`.
///
/// Any file-level problem (missing file, bad quoting, missing column, an
/// overlong row) is returned as an error. Use [`load_movies`](crate::load_movies)
/// for the fail-soft variant.
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    parse_movies_from_reader(BufReader::new(file))
}

/// Parse a movie table from any reader.
///
/// Rust concept: taking `R: Read` instead of a path lets tests feed
/// in-memory byte slices.
pub fn parse_movies_from_reader<R: Read>(reader: R) -> Result<Vec<Movie>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = ColumnMap::resolve(&headers)?;

    let mut movies = Vec::new();
    for record in rdr.records() {
        let record = record?;

        if record.len() > headers.len() {
            return Err(DataLoadError::FieldCountMismatch {
                expected: headers.len(),
                found: record.len(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
            });
        }

        movies.push(columns.movie_from(&record));
    }

    Ok(movies)
}

/// Parse a rating cell. Non-numeric and non-finite values become `None`.
///
/// Example: " 8.5 " -> Some(8.5)
///          "N/A"   -> None
fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

/// Parse a vote count cell.
///
/// Example: "2303232"   -> Some(2303232)
///          "2,303,232" -> Some(2303232)
///          "2000000.0" -> Some(2000000)
///          "-5"        -> None
fn parse_vote_count(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    if cleaned.is_empty() {
        return None;
    }
    if let Ok(count) = cleaned.parse::<u64>() {
        return Some(count);
    }

    // Integral floats show up when a spreadsheet re-exports the column
    let value: f64 = cleaned.parse().ok()?;
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then_some(value as u64)
}
