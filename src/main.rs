//! Receipt Processor server
//!
//! HTTP service that stores purchase receipts and awards loyalty points.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --port 8080 --store locked
//! RUST_LOG=debug cargo run -- --log-format json --workers 4
//! ```
//!
//! # Endpoints
//!
//! - `POST /receipts/process` stores a receipt and returns its id
//! - `GET /receipts/{id}/points` returns the points for a stored receipt
//! - `GET /health` reports liveness
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown (Ctrl-C)
//! - 1: Error (address in use, runtime failure, etc.)

use receipt_processor::{cli, server, telemetry};
use std::process;

fn main() {
    let args = cli::parse_args();
    telemetry::init(args.log_format);

    let config = args.to_server_config();
    if let Err(e) = server::run(config, args.store) {
        tracing::error!(error = %e, "receipt processor failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
