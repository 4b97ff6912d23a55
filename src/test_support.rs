//! Shared fixtures for tests that talk to a local HTTP stub.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const PROFILE_JSON: &str = r#"{"login":"self","public_repos":9}"#;
pub const REPOS_JSON: &str = r#"[{
    "name": "tool",
    "description": "A tool",
    "language": "Rust",
    "fork": false,
    "topics": ["cli"],
    "stargazers_count": 4,
    "forks_count": 1,
    "updated_at": "2024-03-01T12:00:00Z",
    "html_url": "https://github.com/self/tool"
}]"#;

/// Answers each connection by the longest matching request path prefix,
/// 404 otherwise. Returns the base URL.
pub async fn serve(routes: Vec<(&'static str, u16, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut buf).await.unwrap();
                    if n == 0 {
                        return;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                let request = String::from_utf8_lossy(&request);
                let target = request.split_whitespace().nth(1).unwrap_or("");
                let path = target.split('?').next().unwrap_or("").to_string();
                let (status, body) = routes
                    .iter()
                    .filter(|(prefix, _, _)| path.starts_with(prefix))
                    .max_by_key(|(prefix, _, _)| prefix.len())
                    .map(|(_, status, body)| (*status, *body))
                    .unwrap_or((404, "{}"));
                let response = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.ok();
            });
        }
    });

    format!("http://{addr}")
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
