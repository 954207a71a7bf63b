#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Address nothing listens on; commands that reach the network fail fast
pub const UNREACHABLE_API_URL: &str = "http://127.0.0.1:9";

/// Runs the stargaze binary with an isolated config file
pub struct StargazeTest {
    pub temp_dir: TempDir,
    config_path: PathBuf,
}

impl StargazeTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.yaml");
        StargazeTest {
            temp_dir,
            config_path,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(&self.config_path, yaml).expect("Failed to write config file");
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_stargaze"))
            .args(args)
            .arg("--config")
            .arg(&self.config_path)
            .current_dir(self.temp_dir.path())
            .env("STARGAZE_API_URL", UNREACHABLE_API_URL)
            .env("NO_COLOR", "1")
            .env_remove("STARGAZE_LOG")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute stargaze command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

/// Serve exactly one HTTP response on a local port.
///
/// Returns the base URL to point a client at, and a handle yielding the
/// request head that was received.
pub async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).to_string()
    });

    (base_url, handle)
}
