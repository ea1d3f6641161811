use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::models::config::ServerConfig;
use crate::repository::memory::MemoryRepository;
use crate::routes::inquiries::create_inquiry;
use crate::routes::properties::{
    create_property, delete_property, get_property, list_properties, update_property,
};

pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod search;
pub mod seed;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided
/// configuration and repository.
///
/// The repository is constructed (and seeded) by the caller so its lifecycle
/// is explicit: process lifetime in the binary, test scope in tests.
pub async fn run(server_config: ServerConfig, repo: MemoryRepository) -> std::io::Result<()> {
    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(list_properties)
                    .service(get_property)
                    .service(create_property)
                    .service(update_property)
                    .service(delete_property)
                    .service(create_inquiry),
            )
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
