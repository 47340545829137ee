use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::Command;
use crate::client::ApiClient;
use crate::context;

pub mod repo;

impl Command {
    pub async fn run(&self, ctx: &context::Context) -> Result<()> {
        let client = ApiClient::new(&ctx.config.server)
            .with_context(|| format!("invalid server url {}", ctx.config.server))?;
        match self {
            Command::Repo { cmd } => cmd.run(&client).await,
            Command::Generate => {
                client
                    .generate_static_web()
                    .await
                    .context("generating static web")?;
                log::info!("✅ Static web regenerated");
                Ok(())
            }
            Command::UpdatePackage => {
                client
                    .update_package(&ctx.config.username, &ctx.config.api_token)
                    .await
                    .context("calling update-package")?;
                log::info!("✅ Update accepted");
                Ok(())
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
