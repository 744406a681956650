use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

mod balance;
mod error;
mod exchange;
mod form;
mod ledger;
mod mongo;
mod repository;
mod routes;
mod schemas;
mod settings;
mod tracker;

use crate::mongo::MongoRepository;
use crate::repository::{ExpenseRepository, InMemoryRepository};
use crate::settings::Settings;
use crate::tracker::ExpenseTracker;

fn to_io_error(err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

fn cors(allowed_origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header();
    match allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::new().map_err(to_io_error)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_level))
        .init();

    let repository: Arc<dyn ExpenseRepository> = match &settings.mongodb_uri {
        Some(uri) => Arc::new(
            MongoRepository::connect(uri, &settings.database, &settings.collection)
                .await
                .map_err(to_io_error)?,
        ),
        None => {
            info!("No MongoDB URI configured, keeping expenses in memory");
            Arc::new(InMemoryRepository::new())
        }
    };
    let tracker = web::Data::new(ExpenseTracker::new(
        repository,
        settings.parties(),
        settings.price_policy,
    ));

    info!(
        "Splitting expenses between {} and {}, listening on {}:{}",
        settings.first_party, settings.second_party, settings.host, settings.port
    );

    let allowed_origin = settings.allowed_origin.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors(allowed_origin.as_deref()))
            .app_data(tracker.clone())
            .configure(routes::configure)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
