/*!
 * Common test utilities for the accent-translator test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use accent_translator::app_config::Config;
use accent_translator::speech::Voice;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Saves a configuration as conf.json in the specified directory
pub fn create_test_config(dir: &Path, config: &Config) -> Result<PathBuf> {
    let file_path = dir.join("conf.json");
    config.save(&file_path)?;
    Ok(file_path)
}

/// Sentences exercising every accent rule set
pub fn sample_sentences() -> Vec<&'static str> {
    vec![
        "My mom lives in an apartment",
        "Take the elevator, then the truck!",
        "Thank you, friend. Breakfast this afternoon?",
        "Yes, the food is good, isn't it?",
        "Hello... is this right?",
        "*Definitely* not soccer!!!",
    ]
}

/// A small voice set resembling a desktop browser
pub fn test_voices() -> Vec<Voice> {
    vec![
        Voice::new("Google US English", "en-US"),
        Voice::new("Google UK English Female", "en-GB"),
        Voice::new("Google español", "es-ES"),
    ]
}

/// A local HTTP server answering a fixed sequence of responses
pub struct HttpStub {
    /// Translate endpoint served by the stub
    pub url: String,
    requests: JoinHandle<std::io::Result<Vec<String>>>,
}

impl HttpStub {
    /// Serve a single response
    pub async fn serve_once(status: u16, body: &str) -> Result<Self> {
        Self::serve(vec![(status, body.to_string())]).await
    }

    /// Serve each response on its own connection, in order
    pub async fn serve(responses: Vec<(u16, String)>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = format!("http://{}/translate", listener.local_addr()?);

        let requests = tokio::spawn(async move {
            let mut received = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await?;
                received.push(read_request(&mut socket).await?);

                let reason = if status < 400 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await?;
                socket.shutdown().await?;
            }
            Ok::<_, std::io::Error>(received)
        });

        Ok(Self { url, requests })
    }

    /// Raw requests received, once every response has been served
    pub async fn requests(self) -> Result<Vec<String>> {
        Ok(self.requests.await??)
    }
}

/// Body of a raw HTTP request
pub fn request_body(raw: &str) -> &str {
    raw.split_once("\r\n\r\n").map(|(_, body)| body).unwrap_or_default()
}

async fn read_request(socket: &mut TcpStream) -> std::io::Result<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
