//! Movie input validation -- pure logic, no storage access.
//!
//! Every field is checked in one pass so a client sees all problems at
//! once. Type coercion failures report the same message as a range
//! violation for that field.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::movie::{
    MovieInput, NewMovie, MAX_RATING, MAX_TEXT_LEN, MAX_YEAR, MIN_RATING, MIN_YEAR,
};

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// Per-field error messages, keyed by field name.
///
/// Serializes as a plain JSON object (`{"title": "Title is required."}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Validate a raw movie input and normalize it.
///
/// On success returns trimmed strings, an integer year and a rating rounded
/// to one decimal place. On failure returns every field error found; the
/// record is never partially accepted.
pub fn validate_movie(input: &MovieInput) -> Result<NewMovie, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = check_text(input.title.as_ref(), "title", "Title", &mut errors);
    let director = check_text(input.director.as_ref(), "director", "Director", &mut errors);

    let year = coerce_year(input.year.as_ref()).filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y));
    if year.is_none() {
        errors.insert(
            "year",
            format!("Year must be a whole number between {MIN_YEAR} and {MAX_YEAR}."),
        );
    }

    let rating = coerce_rating(input.rating.as_ref())
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r));
    if rating.is_none() {
        errors.insert("rating", "Rating must be a number between 0 and 10.");
    }

    match (title, director, year, rating) {
        (Some(title), Some(director), Some(year), Some(rating)) if errors.is_empty() => {
            Ok(NewMovie {
                title,
                director,
                year,
                rating: round_to(rating, 1),
            })
        }
        _ => Err(errors),
    }
}

/// Round `value` to `places` decimal places, halves away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn check_text(
    value: Option<&Value>,
    field: &str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    let trimmed = match value {
        Some(Value::String(s)) => s.trim(),
        _ => "",
    };

    if trimmed.is_empty() {
        errors.insert(field, format!("{label} is required."));
        return None;
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        errors.insert(
            field,
            format!("{label} must be {MAX_TEXT_LEN} characters or fewer."),
        );
        return None;
    }
    Some(trimmed.to_string())
}

fn coerce_year(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            // 1999.0 is a whole number; 1999.5 is not.
            let f = n.as_f64()?;
            (f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn coerce_rating(value: Option<&Value>) -> Option<f64> {
    let rating = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    rating.is_finite().then_some(rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: Value) -> MovieInput {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> Value {
        json!({
            "title": "Heat",
            "director": "Michael Mann",
            "year": 1995,
            "rating": 8.3
        })
    }

    #[test]
    fn valid_input_is_accepted() {
        let movie = validate_movie(&input(valid())).unwrap();
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.director, "Michael Mann");
        assert_eq!(movie.year, 1995);
        assert!((movie.rating - 8.3).abs() < f64::EPSILON);
    }

    #[test]
    fn strings_are_trimmed() {
        let movie = validate_movie(&input(json!({
            "title": "  Heat \n",
            "director": "\tMichael Mann ",
            "year": 1995,
            "rating": 8
        })))
        .unwrap();
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.director, "Michael Mann");
    }

    #[test]
    fn empty_title_reports_only_title() {
        let errors = validate_movie(&input(json!({
            "title": "",
            "director": "X",
            "year": 1999,
            "rating": 5
        })))
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("title"), Some("Title is required."));
    }

    #[test]
    fn whitespace_only_director_is_required_error() {
        let mut body = valid();
        body["director"] = json!("   ");
        let errors = validate_movie(&input(body)).unwrap_err();
        assert_eq!(errors.get("director"), Some("Director is required."));
    }

    #[test]
    fn year_before_cinema_is_rejected() {
        let errors = validate_movie(&input(json!({"year": 1700}))).unwrap_err();
        assert!(errors.contains("year"));
    }

    #[test]
    fn all_errors_are_collected() {
        let errors = validate_movie(&input(json!({}))).unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["director", "rating", "title", "year"]);
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut body = valid();
        body["title"] = json!("x".repeat(MAX_TEXT_LEN + 1));
        let errors = validate_movie(&input(body)).unwrap_err();
        assert_eq!(
            errors.get("title"),
            Some("Title must be 120 characters or fewer.")
        );
    }

    #[test]
    fn length_is_counted_in_characters() {
        let mut body = valid();
        body["title"] = json!("é".repeat(MAX_TEXT_LEN));
        assert!(validate_movie(&input(body)).is_ok());
    }

    #[test]
    fn non_numeric_year_uses_range_message() {
        let mut body = valid();
        body["year"] = json!("nineteen ninety");
        let bad_type = validate_movie(&input(body)).unwrap_err();

        let mut body = valid();
        body["year"] = json!(2200);
        let out_of_range = validate_movie(&input(body)).unwrap_err();

        assert_eq!(bad_type.get("year"), out_of_range.get("year"));
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let mut body = valid();
        body["year"] = json!(" 2001 ");
        body["rating"] = json!("7.25");
        let movie = validate_movie(&input(body)).unwrap();
        assert_eq!(movie.year, 2001);
        assert!((movie.rating - 7.3).abs() < 1e-9);
    }

    #[test]
    fn fractional_year_is_rejected_but_whole_float_accepted() {
        let mut body = valid();
        body["year"] = json!(1999.5);
        assert!(validate_movie(&input(body)).unwrap_err().contains("year"));

        let mut body = valid();
        body["year"] = json!(1999.0);
        assert_eq!(validate_movie(&input(body)).unwrap().year, 1999);
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for rating in [0.0, 10.0] {
            let mut body = valid();
            body["rating"] = json!(rating);
            assert!(validate_movie(&input(body)).is_ok(), "rating {rating}");
        }
        for rating in [-0.1, 10.01] {
            let mut body = valid();
            body["rating"] = json!(rating);
            let errors = validate_movie(&input(body)).unwrap_err();
            assert_eq!(
                errors.get("rating"),
                Some("Rating must be a number between 0 and 10.")
            );
        }
    }

    #[test]
    fn rating_is_rounded_to_one_decimal() {
        let mut body = valid();
        body["rating"] = json!(8.46);
        let movie = validate_movie(&input(body)).unwrap();
        assert!((movie.rating - 8.5).abs() < 1e-9);
    }

    #[test]
    fn boolean_rating_is_rejected() {
        let mut body = valid();
        body["rating"] = json!(true);
        assert!(validate_movie(&input(body)).unwrap_err().contains("rating"));
    }

    #[test]
    fn field_errors_serialize_as_object() {
        let mut errors = FieldErrors::new();
        errors.insert("title", "Title is required.");
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value, json!({"title": "Title is required."}));
    }

    #[test]
    fn round_to_two_places() {
        assert!((round_to(7.0 / 3.0, 2) - 2.33).abs() < 1e-9);
    }
}
