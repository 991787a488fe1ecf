//! The filter form submitted by the page.
//!
//! All four fields are free text. A blank field means "no constraint".
//! Rating bounds that are not numbers are reported back to the user rather
//! than silently dropped, so a typo never widens the result set unnoticed.

use pipeline::FilterCriteria;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw form fields as posted (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieFilterForm {
    pub min_rating: Option<String>,
    pub max_rating: Option<String>,
    pub genre1: Option<String>,
    pub genre2: Option<String>,
}

/// Validation failures shown on the page.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{field} must be a number, got \"{value}\"")]
    InvalidRatingBound { field: &'static str, value: String },
}

impl MovieFilterForm {
    /// Convert the form into filter criteria.
    ///
    /// # Errors
    /// `FormError::InvalidRatingBound` when a non-blank rating bound is not a
    /// finite number.
    pub fn to_criteria(&self) -> Result<FilterCriteria, FormError> {
        Ok(FilterCriteria {
            min_rating: parse_bound("min_rating", self.min_rating.as_deref())?,
            max_rating: parse_bound("max_rating", self.max_rating.as_deref())?,
            genre1: self.genre1.as_deref().and_then(pipeline::criteria::normalize_term),
            genre2: self.genre2.as_deref().and_then(pipeline::criteria::normalize_term),
        })
    }
}

fn parse_bound(field: &'static str, raw: Option<&str>) -> Result<Option<f64>, FormError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(FormError::InvalidRatingBound {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(min: &str, max: &str, genre1: &str, genre2: &str) -> MovieFilterForm {
        MovieFilterForm {
            min_rating: Some(min.to_string()),
            max_rating: Some(max.to_string()),
            genre1: Some(genre1.to_string()),
            genre2: Some(genre2.to_string()),
        }
    }

    #[test]
    fn test_absent_fields_are_unconstrained() {
        let criteria = MovieFilterForm::default().to_criteria().unwrap();
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_blank_fields_are_unconstrained() {
        let criteria = form("", "  ", "", "\t").to_criteria().unwrap();
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_full_form() {
        let criteria = form(" 8 ", "9.5", " Action ", "sci-fi").to_criteria().unwrap();

        assert_eq!(criteria.min_rating, Some(8.0));
        assert_eq!(criteria.max_rating, Some(9.5));
        assert_eq!(criteria.genre1.as_deref(), Some("Action"));
        assert_eq!(criteria.genre2.as_deref(), Some("sci-fi"));
    }

    #[test]
    fn test_non_numeric_bound_is_reported() {
        let err = form("abc", "", "", "").to_criteria().unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidRatingBound {
                field: "min_rating",
                value: "abc".to_string()
            }
        );

        let err = form("", "nan", "", "").to_criteria().unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidRatingBound {
                field: "max_rating",
                ..
            }
        ));
    }
}
