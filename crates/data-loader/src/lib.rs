//! # Data Loader Crate
//!
//! This crate reads the static movie table the rest of the workspace ranks.
//!
//! ## Main Components
//!
//! - **types**: The `Movie` record
//! - **parser**: Strict parsing of the delimited file into `Movie`s
//! - **loader**: Fail-soft loading used by the request handler
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::load_movies;
//! use std::path::Path;
//!
//! // Never fails: a missing or broken file yields an empty table
//! let movies = load_movies(Path::new("imdb_top_1000.csv"));
//! println!("Loaded {} movies", movies.len());
//! ```
//!
//! ## Learning Goals
//!
//! 1. **Error Handling**: `Result<T>` with a thiserror enum, and deciding
//!    where an error stops propagating (`load_movies`)
//! 2. **Type Safety**: `Option<f64>` instead of NaN for unparseable cells
//! 3. **Generics**: parsing from any `std::io::Read`

// Public modules
pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use loader::load_movies;
pub use parser::{parse_movies, parse_movies_from_reader};
pub use types::Movie;
