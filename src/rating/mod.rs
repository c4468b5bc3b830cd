//! RatingStore - running score totals per laptop.

mod in_memory;

use std::fmt;

pub use in_memory::InMemoryRatingStore;

/// Accumulated ratings of one laptop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rating {
    pub count: u32,
    pub sum: f64,
}

impl Rating {
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    LockPoisoned(&'static str),
}

impl fmt::Display for RatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingError::LockPoisoned(operation) => {
                write!(f, "rating store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for RatingError {}

pub trait RatingStore: Send + Sync {
    /// Add `score` to the laptop's ratings and return the updated totals.
    fn add(&self, laptop_id: &str, score: f64) -> Result<Rating, RatingError>;
}
