use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use pipeline::{FilterCriteria, RankedMovie, filter_and_rank};
use server::ServerConfig;
use server::config::{DEFAULT_DATASET, DEFAULT_HOST, DEFAULT_PORT};
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Instant;

/// Movie Finder - rank a movie table by rating and popularity
#[derive(Parser)]
#[command(name = "movie-rank")]
#[command(about = "Filter and rank movies by rating, votes and genre", long_about = None)]
struct Cli {
    /// Path to the movie table (CSV with title, genre, rating and vote count columns)
    #[arg(short, long, env = "MOVIE_DATASET", default_value = DEFAULT_DATASET, global = true)]
    dataset: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the movie finder web page
    Serve {
        /// Address to listen on
        #[arg(long, env = "MOVIE_HOST", default_value_t = DEFAULT_HOST)]
        host: IpAddr,

        /// Port to listen on
        #[arg(long, env = "MOVIE_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Print the ranked list to the terminal
    Rank {
        #[command(flatten)]
        filters: FilterArgs,

        /// Only show the top N movies
        #[arg(long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Inclusive lower bound on the rating
    #[arg(long, value_parser = parse_rating_bound)]
    min_rating: Option<f64>,

    /// Inclusive upper bound on the rating
    #[arg(long, value_parser = parse_rating_bound)]
    max_rating: Option<f64>,

    /// Genre substring (case-insensitive)
    #[arg(long)]
    genre1: Option<String>,

    /// Second genre substring; both must match
    #[arg(long)]
    genre2: Option<String>,
}

fn parse_rating_bound(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("\"{}\" is not a finite number", raw)),
    }
}

impl FilterArgs {
    fn to_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(min_rating) = self.min_rating {
            criteria = criteria.with_min_rating(min_rating);
        }
        if let Some(max_rating) = self.max_rating {
            criteria = criteria.with_max_rating(max_rating);
        }
        if let Some(genre1) = &self.genre1 {
            criteria = criteria.with_genre1(genre1);
        }
        if let Some(genre2) = &self.genre2 {
            criteria = criteria.with_genre2(genre2);
        }
        criteria
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Serve { host, port } => {
            handle_serve(ServerConfig::new(cli.dataset, host, port)).await?
        }
        Commands::Rank {
            filters,
            limit,
            json,
        } => handle_rank(cli.dataset, &filters.to_criteria(), limit, json)?,
    }

    Ok(())
}

/// Handle the 'serve' command
async fn handle_serve(config: ServerConfig) -> Result<()> {
    if !config.dataset_path.exists() {
        tracing::warn!(
            "Dataset {} does not exist yet; pages will be empty until it does",
            config.dataset_path.display()
        );
    }
    server::serve(config).await.context("Web server failed")
}

/// Handle the 'rank' command
///
/// Unlike the web page, a broken dataset is an error here: there is a user
/// at the terminal who can fix the path.
fn handle_rank(
    dataset: PathBuf,
    criteria: &FilterCriteria,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let start = Instant::now();
    let movies = data_loader::parse_movies(&dataset)
        .with_context(|| format!("Failed to load movie table from {}", dataset.display()))?;
    let total = movies.len();

    let mut ranked = filter_and_rank(movies, criteria);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        print_ranked(&ranked, total);
        println!(
            "{} Ranked {} of {} movies in {:?}",
            "✓".green(),
            ranked.len(),
            total,
            start.elapsed()
        );
    }
    Ok(())
}

/// Helper function to format and print ranked movies
fn print_ranked(ranked: &[RankedMovie], total: usize) {
    println!("{}", format!("Top movies ({} in table):", total).bold().blue());

    for (i, entry) in ranked.iter().enumerate() {
        let movie = &entry.movie;
        let rating = movie
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "?".to_string());
        let votes = movie
            .vote_count
            .map(|v| v.to_string())
            .unwrap_or_else(|| "?".to_string());
        let score = match entry.score {
            Some(s) => format!("{:.3}", s).normal(),
            None => "unscored".dimmed(),
        };

        println!(
            "{}. {} [{}] rating {} ({} votes) - Score: {}",
            (i + 1).to_string().green(),
            movie.title.bold(),
            movie.genre,
            rating,
            votes,
            score
        );
    }
}
