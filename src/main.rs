use crate::app::App;
use crate::config::load_settings;
use crate::db::{init_db, Database};
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod catalog;
mod config;
mod db;
mod domain;
mod errors;
mod remote;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings();

    // 1️⃣ Create the database handle and apply the schema
    let db = Database::new(settings.database_path.clone());
    if let Err(e) = init_db(&db, &settings.schema_path) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    // 2️⃣ Start the server
    let addr: SocketAddr = match settings.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(bind_addr = %settings.bind_addr, error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };
    info!(%addr, workers = settings.max_workers, "starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(settings.max_workers);
    let app = App::new(db, settings);

    // 3️⃣ Serve requests, passing the app context into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
