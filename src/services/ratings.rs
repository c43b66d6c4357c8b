use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::AppError,
    models::{Rating, Stars},
    repository::RatingsRepository,
};

pub const MAX_STARS_RATING: u8 = 5;
pub const STARS_RATING_FORMAT: &str = "given/max";

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digits regex"));

/// Validates rating input, applies the business rules and drives the
/// recommendation heuristic. All input validation lives here so every
/// transport gets the same checks.
#[derive(Clone)]
pub struct RatingsService {
    repository: Arc<dyn RatingsRepository>,
}

impl RatingsService {
    pub fn new(repository: Arc<dyn RatingsRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_rating(&self, coffee_type: &str, stars: &str) -> Result<(), AppError> {
        if coffee_type.is_empty() {
            return Err(AppError::BadRequest(
                "coffeeType parameter is required".into(),
            ));
        }

        if stars.is_empty() {
            return Err(AppError::BadRequest(
                "starRating parameter is required".into(),
            ));
        }

        let stars = parse_stars(stars)?;

        let rating = Rating {
            coffee_type: coffee_type.to_string(),
            stars,
            created_at: Utc::now(),
        };

        self.repository.create_rating(rating).await.map_err(|e| {
            AppError::StorageError(format!("error saving coffee rating, error: {e}"))
        })
    }

    pub async fn get_coffee_type_list(&self) -> Result<Vec<String>, AppError> {
        let ratings = self.repository.get_rating_list().await.map_err(|e| {
            AppError::StorageError(format!("error getting coffee rating list, error: {e}"))
        })?;

        Ok(ratings
            .into_iter()
            .map(|rating| rating.coffee_type)
            .collect())
    }

    pub async fn get_rating(&self, coffee_type: &str) -> Result<Option<Rating>, AppError> {
        if coffee_type.is_empty() {
            return Err(AppError::BadRequest(
                "coffeeType parameter is required".into(),
            ));
        }

        self.repository.get_rating(coffee_type).await.map_err(|e| {
            AppError::StorageError(format!(
                "error getting coffee rating '{coffee_type}', error: {e}"
            ))
        })
    }

    /// Picks the oldest rating above three given stars. Exact-timestamp ties
    /// go to the lexicographically smaller coffee type, so the result does
    /// not depend on the repository's iteration order. `None` when nothing
    /// qualifies.
    pub async fn get_recommendation(&self) -> Result<Option<Rating>, AppError> {
        let ratings = self.repository.get_rating_list().await.map_err(|e| {
            AppError::StorageError(format!(
                "error generating coffee recommendation, error: {e}"
            ))
        })?;

        Ok(ratings
            .into_iter()
            .filter(|rating| rating.stars.given > 3)
            .min_by(|a, b| {
                a.created_at
                    .cmp(&b.created_at)
                    .then_with(|| a.coffee_type.cmp(&b.coffee_type))
            }))
    }
}

/// Parses a `"given/max"` star string. The two digit runs reassembled with a
/// slash must equal the input exactly, which rejects whitespace, signs and
/// any stray characters.
fn parse_stars(stars: &str) -> Result<Stars, AppError> {
    let digits: Vec<&str> = DIGITS_RE.find_iter(stars).map(|m| m.as_str()).collect();

    if digits.len() != 2 {
        return Err(AppError::BadRequest(format!(
            "invalid stars rating format, received: '{stars}', expected: '{STARS_RATING_FORMAT}'"
        )));
    }

    if format!("{}/{}", digits[0], digits[1]) != stars {
        return Err(AppError::BadRequest(format!(
            "invalid stars rating format, received: '{stars}', expected: '{STARS_RATING_FORMAT}'"
        )));
    }

    let given: u32 = digits[0].parse().map_err(|_| {
        AppError::BadRequest(format!(
            "invalid stars rating format, given '{}' is not a number",
            digits[0]
        ))
    })?;

    let max: u32 = digits[1].parse().map_err(|_| {
        AppError::BadRequest(format!(
            "invalid stars rating format, max '{}' is not a number",
            digits[1]
        ))
    })?;

    if max > MAX_STARS_RATING as u32 {
        return Err(AppError::BadRequest(format!(
            "invalid max stars rating, received: '{max}', max allowed: '{MAX_STARS_RATING}'"
        )));
    }

    if given > max || given < 1 {
        return Err(AppError::BadRequest(
            "invalid given stars rating, given rating cannot be greater than max and less than 1"
                .into(),
        ));
    }

    Ok(Stars {
        given: given as u8,
        max: max as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_stars;
    use crate::models::Stars;

    #[test]
    fn parses_valid_star_pairs() {
        assert_eq!(parse_stars("4/5").unwrap(), Stars { given: 4, max: 5 });
        assert_eq!(parse_stars("1/1").unwrap(), Stars { given: 1, max: 1 });
        assert_eq!(parse_stars("5/5").unwrap(), Stars { given: 5, max: 5 });
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(parse_stars("strinvalue").is_err());
        assert!(parse_stars("").is_err());
        assert!(parse_stars("four/five").is_err());
    }

    #[test]
    fn rejects_missing_sides() {
        assert!(parse_stars("5/").is_err());
        assert!(parse_stars("/5").is_err());
        assert!(parse_stars("5").is_err());
    }

    #[test]
    fn rejects_extra_characters() {
        assert!(parse_stars(" 4/5").is_err());
        assert!(parse_stars("4/5 ").is_err());
        assert!(parse_stars("4 / 5").is_err());
        assert!(parse_stars("4//5").is_err());
        assert!(parse_stars("-4/5").is_err());
        assert!(parse_stars("4/5/6").is_err());
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        // max above the cap
        assert!(parse_stars("3/10").is_err());

        // given above max
        assert!(parse_stars("7/5").is_err());

        // given below one
        assert!(parse_stars("0/5").is_err());
    }
}
