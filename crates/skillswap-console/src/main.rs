mod command;
mod config;
mod render;
mod service;

use anyhow::Result;
use config::Config;
use service::ConsoleService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Create and run the wizard console
    let console = ConsoleService::new(config);
    console.run().await
}
