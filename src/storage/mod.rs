//! Object storage sinks for exported CSV files.
//!
//! The sink contract is a single write: `put(key, bytes)`. Writes overwrite
//! any existing object under the same key.

pub mod csv;

use async_trait::async_trait;
use reqwest::Client;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{StorageBackend, StorageConfig};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Upload failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upload of {key} rejected with HTTP {status}")]
    Status {
        status: reqwest::StatusCode,
        key: String,
    },

    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("storage.endpoint_url is required for the http backend")]
    MissingEndpoint,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError>;

    /// Human-readable location of `key`, for log lines.
    fn location(&self, key: &str) -> String;
}

/// Keys are flat file names; anything that could escape the bucket is refused.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let mut components = Path::new(key).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(StorageError::InvalidKey(key.to_string())),
    }
}

/// Stores objects as files under `{root}/{bucket}/`.
#[derive(Debug, Clone)]
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, bucket: &str) -> Self {
        Self {
            dir: root.into().join(bucket),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ObjectStore for FsStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        validate_key(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(key);
        debug!("Writing {} bytes to {}", bytes.len(), path.display());
        tokio::fs::write(&path, bytes).await?;
        Ok(())
    }

    fn location(&self, key: &str) -> String {
        self.dir.join(key).display().to_string()
    }
}

/// Uploads objects with `PUT {endpoint}/{bucket}/{key}`.
#[derive(Clone)]
pub struct HttpStore {
    client: Client,
    endpoint: String,
    bucket: String,
    auth_token: Option<String>,
}

impl HttpStore {
    pub fn new(client: Client, config: &StorageConfig) -> Result<Self, StorageError> {
        let endpoint = config.endpoint().ok_or(StorageError::MissingEndpoint)?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            bucket: config.bucket.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.endpoint,
            urlencoding::encode(&self.bucket),
            urlencoding::encode(key)
        )
    }
}

#[async_trait]
impl ObjectStore for HttpStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        validate_key(key)?;

        let url = self.object_url(key);
        debug!("PUT {} ({} bytes)", url, bytes.len());

        let mut request = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, "text/csv")
            .body(bytes);

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(StorageError::Status {
                status: response.status(),
                key: key.to_string(),
            });
        }

        Ok(())
    }

    fn location(&self, key: &str) -> String {
        self.object_url(key)
    }
}

/// Builds the sink selected by `storage.backend`.
pub fn from_config(config: &StorageConfig) -> Result<Box<dyn ObjectStore>, StorageError> {
    let store: Box<dyn ObjectStore> = match config.backend {
        StorageBackend::Local => Box::new(FsStore::new(&config.root_path, &config.bucket)),
        StorageBackend::Http => Box::new(HttpStore::new(Client::builder().build()?, config)?),
    };
    info!("Using {:?} storage for bucket {}", config.backend, config.bucket);
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("20181016_boxscore_data.csv").is_ok());
        assert!(validate_key("../escape.csv").is_err());
        assert!(validate_key("nested/key.csv").is_err());
        assert!(validate_key("/abs.csv").is_err());
        assert!(validate_key("").is_err());
    }

    fn http_config(endpoint: &str) -> StorageConfig {
        StorageConfig {
            backend: StorageBackend::Http,
            endpoint_url: Some(endpoint.to_string()),
            ..StorageConfig::default()
        }
    }

    /// Accepts one connection, answers with `status_line` and returns the raw request.
    async fn serve_once(status_line: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];

            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);

                let text = String::from_utf8_lossy(&buf);
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if buf.len() >= end + 4 + length {
                        break;
                    }
                }
            }

            let response =
                format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&buf).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    #[test]
    fn test_http_object_url() {
        let store = HttpStore::new(Client::new(), &http_config("http://localhost:9000/")).unwrap();
        assert_eq!(
            store.location("2018_teams_data.csv"),
            "http://localhost:9000/nba-stats/2018_teams_data.csv"
        );
    }

    #[test]
    fn test_http_store_requires_endpoint() {
        let config = StorageConfig {
            backend: StorageBackend::Http,
            ..StorageConfig::default()
        };
        assert!(matches!(
            HttpStore::new(Client::new(), &config),
            Err(StorageError::MissingEndpoint)
        ));
        assert!(matches!(
            from_config(&config),
            Err(StorageError::MissingEndpoint)
        ));
    }

    #[tokio::test]
    async fn test_http_store_put_uploads_body() {
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK").await;
        let mut config = http_config(&endpoint);
        config.auth_token = Some("secret".to_string());
        let store = HttpStore::new(Client::new(), &config).unwrap();

        store
            .put("2018_teams_data.csv", b"teamId\n1610612737\n".to_vec())
            .await
            .unwrap();

        let request = server.await.unwrap();
        let lower = request.to_ascii_lowercase();
        assert!(request.starts_with("PUT /nba-stats/2018_teams_data.csv HTTP/1.1\r\n"));
        assert!(lower.contains("content-type: text/csv"));
        assert!(lower.contains("authorization: bearer secret"));
        assert!(request.ends_with("teamId\n1610612737\n"));
    }

    #[tokio::test]
    async fn test_http_store_put_rejected() {
        let (endpoint, server) = serve_once("HTTP/1.1 403 Forbidden").await;
        let store = HttpStore::new(Client::new(), &http_config(&endpoint)).unwrap();

        let err = store
            .put("20181016_boxscore_data.csv", b"gameId\n".to_vec())
            .await
            .unwrap_err();

        match err {
            StorageError::Status { status, key } => {
                assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
                assert_eq!(key, "20181016_boxscore_data.csv");
            }
            other => panic!("unexpected error: {other}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fs_store_put_overwrites() {
        let root = std::env::temp_dir().join(format!("courtside-store-{}", uuid::Uuid::new_v4()));
        let store = FsStore::new(&root, "bucket");

        store.put("a.csv", b"first".to_vec()).await.unwrap();
        store.put("a.csv", b"second".to_vec()).await.unwrap();

        let written = std::fs::read(store.dir().join("a.csv")).unwrap();
        assert_eq!(written, b"second");

        let _ = std::fs::remove_dir_all(root);
    }
}
