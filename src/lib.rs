use std::net::TcpListener;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod handlers;
pub mod models;
mod routes;
pub mod scoring;
pub mod services;
pub mod store;
pub mod telemetry;

use crate::config::settings::SyncSettings;
use crate::routes::init_routes;
use crate::store::CricketStore;

pub fn run(
    listener: TcpListener,
    store: Arc<dyn CricketStore>,
    sync_settings: SyncSettings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let store_data: web::Data<dyn CricketStore> = web::Data::from(store);
    let sync_settings = web::Data::new(sync_settings);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
            .allowed_origin("https://cricketpro.fly.dev")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(store_data.clone())
            .app_data(sync_settings.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
