mod booking;
mod bus;
mod cli;
mod config;
mod errors;
mod responder;
mod surface;
mod tabs;
mod timeline;
mod utils;
mod widget;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Tracing is initialized inside cli::run once the config (and its
    // logFilter fallback) has been loaded.
    cli::run().await
}
