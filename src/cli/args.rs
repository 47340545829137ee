use clap::Parser;
use std::env;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Manage satis repositories over HTTP and regenerate the static package index",
    long_about = "Runs an HTTP API that stores package repositories and rebuilds the satis static web output after every change.\n\nWithout a subcommand the server is started; subcommands talk to a running server.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long = "api-listen",
        env = "SATIS_API_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:8080",
        help = "REST API listen address (host:port)"
    )]
    pub api_listen: std::net::SocketAddr,

    #[arg(
        long,
        env = "SATIS_API_HOST",
        value_name = "URL",
        default_value = "http://localhost:8080",
        help = "Public base URL used in Location headers"
    )]
    pub host: String,

    #[arg(
        long,
        env = "SATIS_API_USERNAME",
        value_name = "USER",
        default_value = "",
        help = "Username required by the update-package webhook (with --api-token)"
    )]
    pub username: String,

    #[arg(
        long = "api-token",
        env = "SATIS_API_TOKEN",
        value_name = "TOKEN",
        default_value = "",
        hide_env_values = true,
        help = "API token required by the update-package webhook (with --username)"
    )]
    pub api_token: String,

    #[arg(
        long = "db-path",
        env = "SATIS_DB_PATH",
        value_name = "PATH",
        default_value = "data/db.json",
        help = "JSON file storing the configured repositories"
    )]
    pub db_path: String,

    #[arg(
        long = "config-path",
        env = "SATIS_CONFIG_PATH",
        value_name = "PATH",
        default_value = "data/satis.json",
        help = "Satis config file written before each build"
    )]
    pub config_path: String,

    #[arg(
        long = "web-path",
        env = "SATIS_WEB_PATH",
        value_name = "DIR",
        default_value = "web",
        help = "Output directory for the static web"
    )]
    pub web_path: String,

    #[arg(
        long = "satis-bin",
        env = "SATIS_BIN",
        value_name = "PATH",
        default_value = "satis",
        help = "Satis executable used to build the static web"
    )]
    pub satis_bin: String,

    #[arg(
        long,
        env = "SATIS_NAME",
        default_value = "satis-api",
        help = "Repository name written to the satis config"
    )]
    pub name: String,

    #[arg(
        long,
        env = "SATIS_HOMEPAGE",
        value_name = "URL",
        default_value = "http://localhost:8080",
        help = "Homepage written to the satis config"
    )]
    pub homepage: String,

    #[arg(
        long,
        default_value_t = false,
        help = "Do not rebuild the static web when the server starts"
    )]
    pub skip_initial_generate: bool,

    #[arg(
        long = "log-file",
        env = "SATIS_API_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long,
        env = "SATIS_API_SERVER",
        value_name = "URL",
        default_value = "http://127.0.0.1:8080",
        help = "Server used by the client subcommands"
    )]
    pub server: String,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}
