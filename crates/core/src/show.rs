//! Show, movie, and theater shapes plus create-input validation.
//!
//! A show references exactly one movie and one theater. Movies and theaters
//! are owned elsewhere; this crate only reads them to embed their fields.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Message returned when any required create field is absent.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Naive layouts accepted for `show_time` in addition to RFC 3339. Interpreted as UTC.
const NAIVE_SHOW_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// A movie as embedded in a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    /// Running time in minutes.
    pub duration: i32,
    pub genre: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// A theater as embedded in a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theater {
    pub id: DbId,
    pub name: String,
    pub location: String,
}

/// A show with its movie and theater nested as sub-objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowDetail {
    pub id: DbId,
    pub movie_id: DbId,
    pub theater_id: DbId,
    pub show_time: Timestamp,
    pub price: f64,
    pub movie: Movie,
    pub theater: Theater,
}

/// A show with movie and theater descriptive fields merged into the top level.
///
/// Used by the unfiltered listing, which does not carry the movie description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowListing {
    pub id: DbId,
    pub movie_id: DbId,
    pub theater_id: DbId,
    pub show_time: Timestamp,
    pub price: f64,
    pub movie_title: String,
    pub duration: i32,
    pub genre: String,
    pub image_url: Option<String>,
    pub theater_name: String,
    pub location: String,
}

/// A create-request field as it arrives on the wire.
///
/// Clients send ids and prices either as JSON numbers or as numeric strings,
/// so each field is decoded loosely here and interpreted in
/// [`CreateShow::validate`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
    /// Booleans, arrays, and objects. Present but never valid.
    Other(serde::de::IgnoredAny),
}

impl FieldValue {
    /// A blank string counts as an absent field.
    fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }

    fn to_id(&self, field: &str) -> Result<DbId, CoreError> {
        let id = match self {
            FieldValue::Int(n) => Some(*n),
            FieldValue::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Some(*f as i64)
            }
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        };
        id.ok_or_else(|| CoreError::Validation(format!("{field} must be an integer id")))
    }

    fn to_price(&self) -> Result<f64, CoreError> {
        let price = match self {
            FieldValue::Int(n) => Some(*n as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Other(_) => None,
        };
        let price = price
            .ok_or_else(|| CoreError::Validation("price must be a non-negative number".into()))?;
        validate_price(price)?;
        Ok(price)
    }

    fn to_show_time(&self) -> Result<Timestamp, CoreError> {
        match self {
            FieldValue::Text(s) => parse_show_time(s.trim()),
            _ => Err(CoreError::Validation(
                "show_time must be a timestamp string".into(),
            )),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// DTO for creating a show. Every field is optional and loosely typed on the
/// wire so that missing, `null`, or `""` values surface as a validation error
/// rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateShow {
    pub movie_id: Option<FieldValue>,
    pub theater_id: Option<FieldValue>,
    pub show_time: Option<FieldValue>,
    pub price: Option<FieldValue>,
}

/// A validated show ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShow {
    pub movie_id: DbId,
    pub theater_id: DbId,
    pub show_time: Timestamp,
    pub price: f64,
}

impl CreateShow {
    /// Check presence and well-formedness of all four fields.
    ///
    /// Presence is checked for every field before any format check, so a
    /// request missing one field and malforming another reports the missing one.
    pub fn validate(&self) -> Result<NewShow, CoreError> {
        let (Some(movie_id), Some(theater_id), Some(show_time), Some(price)) = (
            present(&self.movie_id),
            present(&self.theater_id),
            present(&self.show_time),
            present(&self.price),
        ) else {
            return Err(CoreError::Validation(ALL_FIELDS_REQUIRED.into()));
        };

        Ok(NewShow {
            movie_id: movie_id.to_id("movie_id")?,
            theater_id: theater_id.to_id("theater_id")?,
            show_time: show_time.to_show_time()?,
            price: price.to_price()?,
        })
    }
}

fn present(field: &Option<FieldValue>) -> Option<&FieldValue> {
    field.as_ref().filter(|v| !v.is_blank())
}

/// Parse a show time as RFC 3339, falling back to a naive UTC date-time.
pub fn parse_show_time(raw: &str) -> Result<Timestamp, CoreError> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_SHOW_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            CoreError::Validation(format!("show_time must be a valid timestamp, got '{raw}'"))
        })
}

/// Ticket prices must be finite and non-negative.
pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Validation(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}
