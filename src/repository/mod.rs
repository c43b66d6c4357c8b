pub mod memory;

use async_trait::async_trait;

use crate::{errors::AppError, models::Rating};

/// Storage contract for rating history, implementable by any backend.
///
/// History per coffee type is append-only; the "current" rating for a type
/// is the last entry appended for it.
#[async_trait]
pub trait RatingsRepository: Send + Sync + 'static {
    /// Appends a rating to the history of its coffee type. There is no
    /// uniqueness constraint; repeated ratings for one type all land in
    /// the same history.
    async fn create_rating(&self, rating: Rating) -> Result<(), AppError>;

    /// Returns the most recent rating for every known coffee type.
    /// Order of the returned list is unspecified.
    async fn get_rating_list(&self) -> Result<Vec<Rating>, AppError>;

    /// Returns the most recent rating for a coffee type, or `None` when the
    /// type has never been rated. An unknown type is not an error.
    async fn get_rating(&self, coffee_type: &str) -> Result<Option<Rating>, AppError>;
}
