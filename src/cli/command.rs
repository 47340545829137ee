use clap::Subcommand;

use crate::cli::repo_cmd::RepoCmd;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Repository management commands",
        long_about = "Add, update, inspect and remove repositories on a running server (see --server)."
    )]
    Repo {
        #[command(subcommand)]
        cmd: RepoCmd,
    },
    #[command(
        about = "Regenerate the static web output",
        long_about = "Ask a running server to rebuild the static package index from its current repositories."
    )]
    Generate,
    #[command(
        about = "Trigger the update-package webhook",
        long_about = "Call the update-package webhook of a running server using --username and --api-token as credentials."
    )]
    UpdatePackage,
}
