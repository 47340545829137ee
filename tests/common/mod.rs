#![allow(dead_code)]

use std::net::TcpListener;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::Duration;

pub struct Server {
    child: Child,
    pub url: String,
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}

pub fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_satis-api"));
    // Keep a developer's .env out of the test.
    cmd.env("DOTENV_PATH", "/nonexistent/.env");
    cmd.env("RUST_LOG", "warn");
    cmd
}

/// Starts the server with `true` standing in for the satis executable.
pub fn start_server(data_dir: &Path) -> Server {
    let port = free_port();
    let url = format!("http://127.0.0.1:{}", port);
    let child = bin()
        .arg("--api-listen")
        .arg(format!("127.0.0.1:{}", port))
        .arg("--host")
        .arg(&url)
        .arg("--db-path")
        .arg(data_dir.join("db.json"))
        .arg("--config-path")
        .arg(data_dir.join("satis.json"))
        .arg("--web-path")
        .arg(data_dir.join("web"))
        .arg("--satis-bin")
        .arg("true")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn server");
    let server = Server { child, url };

    for _ in 0..100 {
        let ready = client(&server)
            .args(["repo", "list"])
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);
        if ready {
            return server;
        }
        thread::sleep(Duration::from_millis(100));
    }
    panic!("server did not become ready at {}", server.url);
}

pub fn client(server: &Server) -> Command {
    let mut cmd = bin();
    cmd.arg("--server").arg(&server.url);
    cmd
}

pub fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).expect("json on stdout")
}
