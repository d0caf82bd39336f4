//! Run the reqres contract suite against a live service.
//!
//! # Running
//!
//! ```bash
//! # Every case against reqres.in
//! cargo run --example run_suite
//!
//! # Skip create/update/delete
//! cargo run --example run_suite -- --read-only
//!
//! # Another deployment, with request logging
//! REQRES_BASE_URL=http://localhost:8080 RUST_LOG=reqres_contract=debug \
//!     cargo run --example run_suite
//! ```
//!
//! Exits with status 1 when any case fails or errors.

use reqres_contract::{run_suite, ReqresClient, SuiteOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let options = if std::env::args().any(|arg| arg == "--read-only") {
        SuiteOptions::read_only()
    } else {
        SuiteOptions::default()
    };

    let client = ReqresClient::from_env()?;
    println!("Running contract suite against {}\n", client.config().base_url);

    let report = run_suite(&client, &options).await;
    println!("{report}");

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
