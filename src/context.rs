use crate::configuration::Configuration;

pub struct Context {
    pub config: Configuration,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let cfg = Configuration {
            api_listen: cli.api_listen,
            host: cli.host.clone(),
            username: cli.username.clone(),
            api_token: cli.api_token.clone(),
            db_path: cli.db_path.clone(),
            config_path: cli.config_path.clone(),
            web_path: cli.web_path.clone(),
            satis_bin: cli.satis_bin.clone(),
            name: cli.name.clone(),
            homepage: cli.homepage.clone(),
            skip_initial_generate: cli.skip_initial_generate,
            log_file: cli.log_file.clone(),
            server: cli.server.clone(),
        };
        Self { config: cfg }
    }
}
