use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{Rating, RatingError, RatingStore};

/// In-memory rating store keyed by laptop id. Clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryRatingStore {
    ratings: Arc<RwLock<HashMap<String, Rating>>>,
}

impl InMemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, laptop_id: &str) -> Result<Option<Rating>, RatingError> {
        let ratings = self
            .ratings
            .read()
            .map_err(|_| RatingError::LockPoisoned("get"))?;
        Ok(ratings.get(laptop_id).copied())
    }
}

impl RatingStore for InMemoryRatingStore {
    fn add(&self, laptop_id: &str, score: f64) -> Result<Rating, RatingError> {
        let mut ratings = self
            .ratings
            .write()
            .map_err(|_| RatingError::LockPoisoned("add"))?;

        let rating = ratings.entry(laptop_id.to_string()).or_default();
        rating.count += 1;
        rating.sum += score;

        Ok(*rating)
    }
}
