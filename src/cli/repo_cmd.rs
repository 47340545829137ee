use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum RepoCmd {
    #[command(
        about = "Add a repository",
        long_about = "Register a new package source. The id is derived from the type and URL; adding the same source twice fails with a conflict."
    )]
    Add {
        #[arg(long = "type", value_name = "TYPE", default_value = "vcs")]
        repo_type: String,
        #[arg(long, value_name = "URL")]
        url: String,
    },
    #[command(
        about = "Replace a repository's type and URL",
        long_about = "Update an existing repository in place. The id stays the same."
    )]
    Save {
        #[arg(long, value_name = "ID")]
        id: String,
        #[arg(long = "type", value_name = "TYPE", default_value = "vcs")]
        repo_type: String,
        #[arg(long, value_name = "URL")]
        url: String,
    },
    #[command(about = "Show a repository")]
    Get {
        #[arg(long, value_name = "ID")]
        id: String,
    },
    #[command(about = "List all repositories")]
    List,
    #[command(about = "Remove a repository")]
    Delete {
        #[arg(long, value_name = "ID")]
        id: String,
    },
}
