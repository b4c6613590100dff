// ============================================================
// File: main.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 16, 2026
//
// Description:
//   Entry point for the record manager program. Sets up logging,
//   reads the store configuration from the environment, and hands
//   off to the REPL in `lib.rs`.
//
//   Responses go to standard output; log output goes to standard
//   error so scripted runs can read stdout line by line.
// ============================================================
use recordstore::{RecordStore, StoreConfig, repl_loop};
use tracing::info;


/// Entry point for the record manager.
fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = StoreConfig::from_env();
    info!(change_log_depth = config.change_log_depth, "starting record manager");

    println!("Record Manager");
    let mut store = RecordStore::with_config(config);

    // Hand off to the main command loop
    repl_loop(&mut store);
}
