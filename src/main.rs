#[tokio::main]
async fn main() {
    coffee_ratings_api::start_server().await;
}
