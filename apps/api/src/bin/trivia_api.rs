use cafe_trivia_api::config::{Config, Service};
use cafe_trivia_api::server::{self, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env(Service::Trivia)?;
    server::run_trivia(config).await
}
