mod config;
mod error;
mod rate_limit;
mod services;
mod storage;

use crate::config::Config;
use crate::rate_limit::{SubmissionLimiter, SystemClock};
use crate::storage::LeadStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::load();

    let store = LeadStore::open(&config.database_path).map_err(io::Error::other)?;
    info!(
        "Lead store holds {} leads",
        store.count().map_err(io::Error::other)?
    );
    let store = web::Data::new(store);

    let limiter = Arc::new(SubmissionLimiter::new(
        config.rate_limit.clone(),
        Arc::new(SystemClock),
    ));

    // Drop stale rate limit counters in the background
    tokio::spawn(rate_limit::start_sweeper(limiter.clone()));
    let limiter = web::Data::from(limiter);

    if !config.public_dir.is_dir() {
        warn!(
            "Public directory {} not found; build the frontend with trunk first",
            config.public_dir.display()
        );
    }
    let public_dir = config.public_dir.clone();

    info!(
        "BondBack Hero server running on http://{}:{}",
        config.host, config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(limiter.clone())
            .service(services::leads::configure_routes())
            .service(services::assets::configure(&public_dir))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
