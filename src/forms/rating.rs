//! Qualitative rating from the evaluation factor
//!
//! Evaluations are scored on a 0–7 scale and mapped to a fixed set of
//! bands. Every band below the top is half-open: a 6.5 is "Very Good",
//! not "Good".

use serde::{Deserialize, Serialize};
use std::fmt;

use super::FieldSink;

/// Rating band for an evaluation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    VeryGood,
    Good,
    Satisfactory,
    Fair,
    Deficient,
}

impl Rating {
    /// Label shown in the rating field.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::VeryGood => "Very Good",
            Rating::Good => "Good",
            Rating::Satisfactory => "Satisfactory",
            Rating::Fair => "Fair",
            Rating::Deficient => "Deficient",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an evaluation factor into its rating band.
///
/// Returns `None` for anything no band covers: NaN and scores above 7.
/// Scores below 4 (including negatives) are all "Deficient".
pub fn classify_evaluation(factor: f64) -> Option<Rating> {
    if factor == 7.0 {
        Some(Rating::Excellent)
    } else if (6.5..7.0).contains(&factor) {
        Some(Rating::VeryGood)
    } else if (6.0..6.5).contains(&factor) {
        Some(Rating::Good)
    } else if (5.0..6.0).contains(&factor) {
        Some(Rating::Satisfactory)
    } else if (4.0..5.0).contains(&factor) {
        Some(Rating::Fair)
    } else if factor < 4.0 {
        Some(Rating::Deficient)
    } else {
        None
    }
}

/// Recompute the rating field from the raw score field value.
///
/// Unparsable or out-of-band input clears the field.
pub fn update_rating(raw_factor: &str, sink: &mut dyn FieldSink) {
    match raw_factor.trim().parse::<f64>().ok().and_then(classify_evaluation) {
        Some(rating) => sink.set_text(rating.label()),
        None => sink.clear(),
    }
}
