//! Program to check the liveness of the URLs of a CSV file.
//!
//! ```text
//! cargo run -- links.csv --max-workers 25
//! ```
use linkprobe::app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
