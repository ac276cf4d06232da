use crate::config::AppConfig;
use crate::responses::errors::error_to_response;
use crate::router::{handle, App};
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod auth;
mod config;
mod domain;
mod errors;
mod forms;
mod responses;
mod router;
mod services;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Resolve configuration from the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the API/identity clients and the session store
    let app = match App::new(&config) {
        Ok(app) => Arc::new(app),
        Err(e) => {
            eprintln!("❌ Startup failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid BIND_ADDR '{}': {e}", config.bind_addr);
            std::process::exit(1);
        }
    };
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing the app handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
