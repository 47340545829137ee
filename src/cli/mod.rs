mod args;
mod command;
mod repo_cmd;

pub use args::Cli;
pub use command::Command;
pub use repo_cmd::RepoCmd;

pub use args::parse;
