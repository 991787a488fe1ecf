//! HTML rendering for the ranked movie page.

use std::sync::Arc;

use pipeline::RankedMovie;
use serde::Serialize;
use tera::{Context, Tera};

use crate::form::MovieFilterForm;

// Embed the template at compile time so the binary is self-contained
const TPL_INDEX: &str = include_str!("../templates/index.html");

/// Shown in place of a missing rating, vote count or score
const MISSING: &str = "—";

/// Compile the embedded templates.
///
/// Tera autoescapes templates whose names end in `.html`, so titles and
/// genres from the dataset are escaped on output.
pub fn build_templates() -> Result<Arc<Tera>, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template("index.html", TPL_INDEX)?;
    Ok(Arc::new(tera))
}

/// One table row, pre-formatted for display.
#[derive(Debug, Serialize)]
pub struct MovieRow {
    pub rank: usize,
    pub title: String,
    pub genre: String,
    pub rating: String,
    pub vote_count: String,
    pub score: String,
}

impl MovieRow {
    fn from_ranked(rank: usize, ranked: &RankedMovie) -> Self {
        let movie = &ranked.movie;
        Self {
            rank,
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            rating: movie
                .rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| MISSING.to_string()),
            vote_count: movie
                .vote_count
                .map(|v| v.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            score: ranked
                .score
                .map(|s| format!("{:.3}", s))
                .unwrap_or_else(|| MISSING.to_string()),
        }
    }
}

/// Submitted form values echoed back into the inputs.
#[derive(Debug, Default, Serialize)]
struct FormValues {
    min_rating: String,
    max_rating: String,
    genre1: String,
    genre2: String,
}

impl From<&MovieFilterForm> for FormValues {
    fn from(form: &MovieFilterForm) -> Self {
        Self {
            min_rating: form.min_rating.clone().unwrap_or_default(),
            max_rating: form.max_rating.clone().unwrap_or_default(),
            genre1: form.genre1.clone().unwrap_or_default(),
            genre2: form.genre2.clone().unwrap_or_default(),
        }
    }
}

/// Everything the index template needs.
#[derive(Debug, Serialize)]
pub struct IndexPage {
    movies: Vec<MovieRow>,
    form: FormValues,
    has_error: bool,
    error: String,
}

impl IndexPage {
    /// A page listing `ranked` in order, with the form re-populated.
    pub fn results(ranked: &[RankedMovie], form: &MovieFilterForm) -> Self {
        Self {
            movies: ranked
                .iter()
                .enumerate()
                .map(|(i, r)| MovieRow::from_ranked(i + 1, r))
                .collect(),
            form: FormValues::from(form),
            has_error: false,
            error: String::new(),
        }
    }

    /// A page with a validation message and no results.
    pub fn invalid(message: impl Into<String>, form: &MovieFilterForm) -> Self {
        Self {
            movies: Vec::new(),
            form: FormValues::from(form),
            has_error: true,
            error: message.into(),
        }
    }

    pub fn render(&self, tera: &Tera) -> Result<String, tera::Error> {
        let context = Context::from_serialize(self)?;
        tera.render("index.html", &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Movie;

    #[test]
    fn test_templates_compile() {
        let tera = build_templates().unwrap();
        assert!(tera.get_template_names().any(|name| name == "index.html"));
    }

    #[test]
    fn test_render_results() {
        let tera = build_templates().unwrap();
        let mut unrated = Movie::new("Unrated", "Drama", 0.0, 5);
        unrated.rating = None;
        let ranked = vec![
            RankedMovie {
                movie: Movie::new("A", "Drama", 9.0, 2_000_000),
                score: Some(9.6),
            },
            RankedMovie {
                movie: unrated,
                score: None,
            },
        ];

        let html = IndexPage::results(&ranked, &MovieFilterForm::default())
            .render(&tera)
            .unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Results: 2"));
        assert!(html.contains("9.600"));
        assert!(html.contains("2000000"));
        assert!(html.contains(MISSING));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_render_escapes_html() {
        let tera = build_templates().unwrap();
        let ranked = vec![RankedMovie {
            movie: Movie::new("<script>alert(1)</script>", "Drama", 8.0, 1),
            score: Some(8.0),
        }];
        let form = MovieFilterForm {
            genre1: Some("\"><b>".to_string()),
            ..Default::default()
        };

        let html = IndexPage::results(&ranked, &form).render(&tera).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("\"><b>"));
    }

    #[test]
    fn test_render_invalid() {
        let tera = build_templates().unwrap();
        let form = MovieFilterForm {
            min_rating: Some("abc".to_string()),
            ..Default::default()
        };

        let html = IndexPage::invalid("min_rating must be a number", &form)
            .render(&tera)
            .unwrap();

        assert!(html.contains("class=\"error\""));
        assert!(html.contains("min_rating must be a number"));
        assert!(html.contains("value=\"abc\""));
        assert!(html.contains("Results: 0"));
    }
}
