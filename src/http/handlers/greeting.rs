use axum::Json;

pub async fn greeting_handler() -> Json<&'static str> {
    Json("Hello world!")
}
