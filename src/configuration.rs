use std::net::SocketAddr;

#[derive(Clone, Debug)]
pub struct Configuration {
    pub api_listen: SocketAddr,
    pub host: String,
    pub username: String,
    pub api_token: String,
    pub db_path: String,
    pub config_path: String,
    pub web_path: String,
    pub satis_bin: String,
    pub name: String,
    pub homepage: String,
    pub skip_initial_generate: bool,
    pub log_file: Option<String>,
    pub server: String,
}
