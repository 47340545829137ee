mod app;
mod cli;
mod client;
mod commands;
mod configuration;
mod context;
mod rest;
mod satis;
mod tracing;
mod types;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
