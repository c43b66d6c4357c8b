use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        create_rating_handler, get_coffee_type_list_handler, get_rating_handler,
        get_recommendation_handler, greeting_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/greeting", get(greeting_handler))
        .route("/ratings", post(create_rating_handler).get(get_rating_handler))
        .route("/ratings/coffee-types", get(get_coffee_type_list_handler))
        .route("/recommendation", get(get_recommendation_handler))
        .with_state(state);

    Router::new().nest("/api/coffee-ratings", api)
}
