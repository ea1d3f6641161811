use config::Config;
use dotenvy::dotenv;
use log::info;

use premier_realty::models::config::ServerConfig;
use premier_realty::repository::memory::MemoryRepository;
use premier_realty::seed::seed_sample_properties;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let server_config: ServerConfig = Config::builder()
        .set_default("address", "127.0.0.1")
        .and_then(|builder| builder.set_default("port", 8080_i64))
        .map_err(|e| std::io::Error::other(format!("Failed to prepare configuration: {e}")))?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Failed to parse configuration: {e}")))?;

    let repo = MemoryRepository::new();
    let seeded = seed_sample_properties(&repo)
        .map_err(|e| std::io::Error::other(format!("Failed to seed sample listings: {e}")))?;
    info!(
        "Seeded {seeded} sample listings, serving on {}:{}",
        server_config.address, server_config.port
    );

    premier_realty::run(server_config, repo).await
}
