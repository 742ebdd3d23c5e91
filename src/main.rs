//! credgate - Entry Point
//!
//! An interactive registration and login console backed by a JSON
//! credential store.

use log::{error, info};
use std::io;
use std::process;

use credgate::config::AppConfig;
use credgate::console::Console;
use credgate::error::AppError;
use credgate::store::FileStore;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    if let Err(e) = run() {
        error!("Startup failed: {}", e);
        eprintln!("credgate: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    info!("Storing registered users in {}", config.storage_path);

    let mut store = FileStore::open(config.storage_path_buf())?;
    let mut console = Console::new(&mut store);
    console.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
