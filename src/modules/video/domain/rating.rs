use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Age rating of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "L")]
    RL,
    #[serde(rename = "10")]
    R10,
    #[serde(rename = "12")]
    R12,
    #[serde(rename = "14")]
    R14,
    #[serde(rename = "16")]
    R16,
    #[serde(rename = "18")]
    R18,
}

impl Rating {
    pub const ALL: [Rating; 6] = [
        Rating::RL,
        Rating::R10,
        Rating::R12,
        Rating::R14,
        Rating::R16,
        Rating::R18,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::RL => "L",
            Rating::R10 => "10",
            Rating::R12 => "12",
            Rating::R14 => "14",
            Rating::R16 => "16",
            Rating::R18 => "18",
        }
    }
}

impl FromStr for Rating {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|rating| rating.as_str() == value)
            .ok_or_else(|| {
                AppError::InvalidArgument(
                    "The rating must be one of the following values: L, 10, 12, 14, 16, 18"
                        .to_string(),
                )
            })
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_rating() {
        for rating in Rating::ALL {
            assert_eq!(rating.as_str().parse::<Rating>(), Ok(rating));
        }
    }

    #[test]
    fn rejects_unknown_rating() {
        let error = "PG-13".parse::<Rating>().unwrap_err();

        assert_eq!(
            error.to_string(),
            "The rating must be one of the following values: L, 10, 12, 14, 16, 18"
        );
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_value(Rating::R14).unwrap(), "14");
        assert_eq!(serde_json::from_str::<Rating>("\"L\"").unwrap(), Rating::RL);
    }
}
