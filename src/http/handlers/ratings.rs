use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{errors::AppError, state::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub coffee_type: String,
    pub star_rating: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingPayload {
    pub coffee_type: Option<String>,
    pub star_rating: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingQuery {
    pub coffee_type: Option<String>,
}

// Missing body fields are forwarded as empty strings so the 400 comes out
// of service validation, whatever the transport.
pub async fn create_rating_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRatingPayload>,
) -> Result<(StatusCode, Json<&'static str>), (StatusCode, Json<Value>)> {
    let coffee_type = payload.coffee_type.unwrap_or_default();
    let star_rating = payload.star_rating.unwrap_or_default();

    state
        .ratings
        .create_rating(&coffee_type, &star_rating)
        .await
        .map_err(|e| {
            tracing::error!("Error creating rating for '{coffee_type}': {e}");
            e.to_response()
        })?;

    tracing::info!("Rating created for coffee type '{coffee_type}'");
    Ok((StatusCode::CREATED, Json("Rating created")))
}

pub async fn get_coffee_type_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, (StatusCode, Json<Value>)> {
    let coffee_types = state.ratings.get_coffee_type_list().await.map_err(|e| {
        tracing::error!("Error retrieving coffee type list: {e}");
        e.to_response()
    })?;

    Ok(Json(coffee_types))
}

pub async fn get_rating_handler(
    State(state): State<AppState>,
    Query(query): Query<RatingQuery>,
) -> Result<Json<RatingDto>, (StatusCode, Json<Value>)> {
    let coffee_type = query.coffee_type.unwrap_or_default();

    let rating = state.ratings.get_rating(&coffee_type).await.map_err(|e| {
        tracing::error!("Error retrieving rating for '{coffee_type}': {e}");
        e.to_response()
    })?;

    let Some(rating) = rating else {
        return Err(AppError::BadRequest(format!(
            "no rating exists for coffee type '{coffee_type}'"
        ))
        .to_response());
    };

    Ok(Json(RatingDto {
        coffee_type: rating.coffee_type,
        star_rating: rating.stars.to_string(),
    }))
}

pub async fn get_recommendation_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let rating = state.ratings.get_recommendation().await.map_err(|e| {
        tracing::error!("Error generating recommendation: {e}");
        e.to_response()
    })?;

    match rating {
        Some(rating) => Ok(Json(json!({ "coffeeType": rating.coffee_type }))),
        None => Ok(Json(json!({ "message": "NO_RECOMMENDATIONS_AVAILABLE" }))),
    }
}
