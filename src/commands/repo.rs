use anyhow::{Context, Result};

use super::print_json;
use crate::cli::RepoCmd;
use crate::client::ApiClient;
use crate::types::Repo;

impl RepoCmd {
    pub async fn run(&self, client: &ApiClient) -> Result<()> {
        match self {
            RepoCmd::Add { repo_type, url } => {
                let repo = client
                    .add_repo(repo_type, url)
                    .await
                    .with_context(|| format!("adding repo {}", url))?;
                print_json(&repo)
            }
            RepoCmd::Save { id, repo_type, url } => {
                let repo = Repo {
                    id: id.clone(),
                    repo_type: repo_type.clone(),
                    url: url.clone(),
                };
                let saved = client
                    .save_repo(&repo)
                    .await
                    .with_context(|| format!("saving repo {}", id))?;
                print_json(&saved)
            }
            RepoCmd::Get { id } => {
                let repo = client
                    .find_repo(id)
                    .await
                    .with_context(|| format!("loading repo {}", id))?;
                print_json(&repo)
            }
            RepoCmd::List => {
                let repos = client.find_all_repos().await.context("listing repos")?;
                print_json(&repos)
            }
            RepoCmd::Delete { id } => {
                client
                    .delete_repo(id)
                    .await
                    .with_context(|| format!("deleting repo {}", id))?;
                log::info!("🗑️ Deleted repo {}", id);
                Ok(())
            }
        }
    }
}
