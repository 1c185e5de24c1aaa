use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer accepted either as a JSON number or as a numeric string.
///
/// Browser forms frequently submit select values as strings (`"3"`), so
/// identifiers and ratings coming from request bodies go through this
/// instead of a bare `i32`.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Deserializes an `i32` from either `3` or `"3"`.
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => i32::try_from(value)
            .map_err(|_| de::Error::custom(format!("integer out of range: {}", value))),
        IntOrString::Str(raw) => raw
            .trim()
            .parse::<i32>()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {:?}", raw))),
    }
}

/// Difficulty rating of a trivia question
///
/// # Invariants
/// - Between `Difficulty::MIN` and `Difficulty::MAX` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Difficulty(i32);

impl Difficulty {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    /// Creates a difficulty, rejecting values outside the rating scale
    ///
    /// # Example
    /// ```
    /// use cafe_trivia_api::domain::value_objects::Difficulty;
    ///
    /// assert_eq!(Difficulty::new(3).unwrap().value(), 3);
    /// assert!(Difficulty::new(9).is_err());
    /// ```
    pub fn new(value: i32) -> Result<Self, String> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Difficulty(value))
        } else {
            Err(format!(
                "Difficulty must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            ))
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
