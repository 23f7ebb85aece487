use std::fmt;

use serde::{Deserialize, Serialize};

/// Content rating of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Er,
    L,
    Age10,
    Age12,
    Age14,
    Age16,
    Age18,
}

impl Rating {
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Er => "ER",
            Rating::L => "L",
            Rating::Age10 => "10",
            Rating::Age12 => "12",
            Rating::Age14 => "14",
            Rating::Age16 => "16",
            Rating::Age18 => "18",
        }
    }

    /// Permissive lookup: unknown labels yield `None` rather than an error,
    /// leaving the "rating is missing" report to aggregate validation.
    pub fn of(label: &str) -> Option<Rating> {
        [
            Rating::Er,
            Rating::L,
            Rating::Age10,
            Rating::Age12,
            Rating::Age14,
            Rating::Age16,
            Rating::Age18,
        ]
        .into_iter()
        .find(|rating| rating.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
