use std::sync::Arc;

use crate::{repository::RatingsRepository, services::RatingsService};

pub type SharedRatingsRepository = Arc<dyn RatingsRepository>;

#[derive(Clone)]
pub struct AppState {
    pub ratings: RatingsService,
}

impl AppState {
    pub fn new(repository: SharedRatingsRepository) -> Self {
        Self {
            ratings: RatingsService::new(repository),
        }
    }
}
