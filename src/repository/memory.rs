use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{errors::AppError, models::Rating, repository::RatingsRepository};

/// Process-local store. State lives for the lifetime of the process and is
/// reset on restart. The mutex guards the whole map so readers never observe
/// a torn append.
#[derive(Default)]
pub struct InMemoryRatings {
    ratings: Mutex<HashMap<String, Vec<Rating>>>,
}

impl InMemoryRatings {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RatingsRepository for InMemoryRatings {
    async fn create_rating(&self, rating: Rating) -> Result<(), AppError> {
        let mut ratings = self.ratings.lock().await;
        ratings
            .entry(rating.coffee_type.clone())
            .or_default()
            .push(rating);

        Ok(())
    }

    async fn get_rating_list(&self) -> Result<Vec<Rating>, AppError> {
        let ratings = self.ratings.lock().await;
        let latest = ratings
            .values()
            .filter_map(|history| history.last().cloned())
            .collect();

        Ok(latest)
    }

    async fn get_rating(&self, coffee_type: &str) -> Result<Option<Rating>, AppError> {
        let ratings = self.ratings.lock().await;
        Ok(ratings
            .get(coffee_type)
            .and_then(|history| history.last().cloned()))
    }
}
