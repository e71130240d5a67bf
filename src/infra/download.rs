//! HTTP artifact download
//!
//! Streams a release artifact to disk with optional progress reporting.
//! There is intentionally no retry, resume, or checksum layer here; a
//! failed download removes the partial file and reports the error.

use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::config::defaults;
use crate::error::DownloadError;

/// Progress callback type: (`bytes_downloaded`, `total_bytes`)
///
/// `total_bytes` is zero when the server did not announce a length.
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// Download result containing file path and size
#[derive(Debug)]
pub struct DownloadResult {
    /// Path to the downloaded file
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

/// Download manager for fetching release artifacts
#[derive(Debug, Clone)]
pub struct DownloadManager {
    /// HTTP client
    client: reqwest::Client,
}

impl DownloadManager {
    /// Create a new download manager
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(defaults::DOWNLOAD_TIMEOUT_SECS))
                .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Download a file to `dest`, creating parent directories as needed.
    pub async fn download(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<ProgressCallback>,
    ) -> Result<DownloadResult, DownloadError> {
        tracing::info!(%url, dest = %dest.display(), "downloading artifact");

        match self.download_inner(url, dest, progress.as_ref()).await {
            Ok(result) => Ok(result),
            Err(e) => {
                // Drop the partial file; a later attempt starts clean
                let _ = tokio::fs::remove_file(dest).await;
                Err(e)
            }
        }
    }

    async fn download_inner(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<&ProgressCallback>,
    ) -> Result<DownloadResult, DownloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::Network {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DownloadError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let total_size = response.content_length().unwrap_or(0);

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DownloadError::Io {
                    path: parent.to_path_buf(),
                    error: e.to_string(),
                })?;
        }

        let mut file = File::create(dest).await.map_err(|e| DownloadError::Io {
            path: dest.to_path_buf(),
            error: e.to_string(),
        })?;

        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| DownloadError::Network {
                url: url.to_string(),
                error: e.to_string(),
            })?;

            file.write_all(&chunk)
                .await
                .map_err(|e| DownloadError::Io {
                    path: dest.to_path_buf(),
                    error: e.to_string(),
                })?;

            downloaded += chunk.len() as u64;

            if let Some(cb) = progress {
                cb(downloaded, total_size);
            }
        }

        file.flush().await.map_err(|e| DownloadError::Io {
            path: dest.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(DownloadResult {
            path: dest.to_path_buf(),
            size: downloaded,
        })
    }
}

impl Default for DownloadManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_download_success() {
        let mock_server = MockServer::start().await;
        let content = b"artifact bytes";

        Mock::given(method("GET"))
            .and(path("/nvgt_0.89.0.tar.gz"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("nvgt_0.89.0.tar.gz");
        let manager = DownloadManager::new();

        let result = manager
            .download(
                &format!("{}/nvgt_0.89.0.tar.gz", mock_server.uri()),
                &dest,
                None,
            )
            .await
            .unwrap();

        assert_eq!(result.size, content.len() as u64);
        assert_eq!(std::fs::read(&dest).unwrap(), content);
    }

    #[tokio::test]
    async fn test_download_creates_parent_directories() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/a.bin"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"x".to_vec()))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("nested/dir/a.bin");
        let manager = DownloadManager::new();

        manager
            .download(&format!("{}/a.bin", mock_server.uri()), &dest, None)
            .await
            .unwrap();

        assert!(dest.exists());
    }

    #[tokio::test]
    async fn test_download_with_progress_callback() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/p.bin"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 64]))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("p.bin");
        let manager = DownloadManager::new();

        let seen = std::sync::Arc::new(std::sync::atomic::AtomicU64::new(0));
        let seen_clone = seen.clone();
        let progress: ProgressCallback = Box::new(move |downloaded, _total| {
            seen_clone.store(downloaded, std::sync::atomic::Ordering::SeqCst);
        });

        manager
            .download(&format!("{}/p.bin", mock_server.uri()), &dest, Some(progress))
            .await
            .unwrap();

        assert_eq!(seen.load(std::sync::atomic::Ordering::SeqCst), 64);
    }

    #[tokio::test]
    async fn test_download_http_error_reports_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing.bin"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("missing.bin");
        let manager = DownloadManager::new();

        let err = manager
            .download(&format!("{}/missing.bin", mock_server.uri()), &dest, None)
            .await
            .unwrap_err();

        match err {
            DownloadError::HttpStatus { status, .. } => assert_eq!(status, 404),
            e => panic!("Expected HttpStatus error, got: {e:?}"),
        }
        // No partial file left behind
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_download_network_error() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("never.bin");
        let manager = DownloadManager::new();

        // Port 1 is essentially guaranteed to refuse connections
        let err = manager
            .download("http://127.0.0.1:1/never.bin", &dest, None)
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::Network { .. }));
        assert!(!dest.exists());
    }
}
