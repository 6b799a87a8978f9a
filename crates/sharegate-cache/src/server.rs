//! Memoizing file server over a [`ContentRoot`].

use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use tracing::{error, info};

use sharegate_core::result::AppResult;
use sharegate_core::types::{clean, encode, split_last};

use crate::negotiate;
use crate::root::ContentRoot;
use crate::store::ContentStore;

/// Serves files under a root directory, reading each from disk at most once.
///
/// Directories are canonical without a trailing slash (the root is `/`), and
/// resolve to their index document. A request naming the index document
/// directly is redirected to its directory.
#[derive(Debug)]
pub struct CachedFileServer {
    root: ContentRoot,
    store: ContentStore,
    index_file: String,
    /// URL prefix this server is mounted under, prepended to redirects.
    mount: String,
}

impl CachedFileServer {
    /// Creates a server rooted at `root`, mounted at `/`.
    pub fn new(root: ContentRoot, index_file: impl Into<String>) -> Self {
        Self {
            root,
            store: ContentStore::new(),
            index_file: index_file.into(),
            mount: String::new(),
        }
    }

    /// Sets the URL prefix the server is mounted under, e.g. `/~`.
    pub fn with_mount(mut self, mount: impl Into<String>) -> Self {
        self.mount = mount.into().trim_end_matches('/').to_string();
        self
    }

    /// The in-memory store backing this server.
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Serves `request_path`, a decoded path relative to the mount point.
    ///
    /// Missing resources yield `404`. Any other failure is logged and yields
    /// a generic `500`.
    pub async fn serve(&self, request_path: &str, headers: &HeaderMap) -> Response {
        match self.try_serve(request_path, headers).await {
            Ok(response) => response,
            Err(e) if e.is_not_found() => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            Err(e) => {
                error!(path = %request_path, error = %e, "Failed to serve content");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }

    async fn try_serve(&self, request_path: &str, headers: &HeaderMap) -> AppResult<Response> {
        let cleaned = clean(request_path);
        let (parent, name) = split_last(&cleaned);

        if name == self.index_file {
            return Ok(self.redirect(parent));
        }

        let wants_directory = request_path.ends_with('/') && cleaned != "/";
        if !wants_directory {
            if let Some(entry) = self.store.get(&cleaned) {
                return Ok(negotiate::respond(&entry, name, headers));
            }
        }

        let key = if self.root.metadata(&cleaned).await?.is_dir() {
            if wants_directory {
                return Ok(self.redirect(&cleaned));
            }
            self.index_path(&cleaned)
        } else {
            cleaned.clone()
        };

        let entry = match self.store.get(&key) {
            Some(entry) => entry,
            None => {
                let entry = Arc::new(self.root.load(&key).await?);
                info!(
                    path = %key,
                    bytes = entry.content.len(),
                    "Cache miss: loaded into memory"
                );
                self.store.insert(key.clone(), Arc::clone(&entry));
                entry
            }
        };

        let (_, name) = split_last(&key);
        Ok(negotiate::respond(&entry, name, headers))
    }

    fn index_path(&self, directory: &str) -> String {
        if directory == "/" {
            format!("/{}", self.index_file)
        } else {
            format!("{directory}/{}", self.index_file)
        }
    }

    fn redirect(&self, target: &str) -> Response {
        let location = if self.mount.is_empty() {
            target.to_string()
        } else if target == "/" {
            format!("{}/", self.mount)
        } else {
            format!("{}{}", self.mount, target)
        };
        Redirect::to(&encode(&location)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use std::path::Path;

    fn server(dir: &Path) -> CachedFileServer {
        CachedFileServer::new(ContentRoot::open(dir).unwrap(), "index.html")
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/index.html"), "<h1>docs</h1>").unwrap();
        std::fs::write(dir.path().join("docs/readme.txt"), "read me").unwrap();
        std::fs::create_dir(dir.path().join("empty")).unwrap();
        dir
    }

    async fn body(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_serves_file() {
        let dir = fixture();
        let server = server(dir.path());
        let response = server.serve("/docs/readme.txt", &HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(response).await, "read me");
    }

    #[tokio::test]
    async fn test_second_request_is_served_from_memory() {
        let dir = fixture();
        let server = server(dir.path());

        let first = server.serve("/docs/readme.txt", &HeaderMap::new()).await;
        assert_eq!(body(first).await, "read me");

        std::fs::write(dir.path().join("docs/readme.txt"), "changed on disk").unwrap();

        let second = server.serve("/docs/readme.txt", &HeaderMap::new()).await;
        assert_eq!(body(second).await, "read me");
        assert_eq!(server.store().len(), 1);
    }

    #[tokio::test]
    async fn test_cached_entry_survives_deletion() {
        let dir = fixture();
        let server = server(dir.path());
        server.serve("/docs/readme.txt", &HeaderMap::new()).await;

        std::fs::remove_file(dir.path().join("docs/readme.txt")).unwrap();

        let response = server.serve("/docs/readme.txt", &HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_name_redirects_to_directory() {
        let dir = fixture();
        let server = server(dir.path());

        let response = server.serve("/docs/index.html", &HeaderMap::new()).await;
        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/docs");

        let response = server.serve("/index.html", &HeaderMap::new()).await;
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_trailing_slash_redirects_to_canonical_directory() {
        let dir = fixture();
        let server = server(dir.path());
        let response = server.serve("/docs/", &HeaderMap::new()).await;
        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/docs");
    }

    #[tokio::test]
    async fn test_directory_resolves_to_index() {
        let dir = fixture();
        let server = server(dir.path());

        let response = server.serve("/docs", &HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html"
        );
        assert_eq!(body(response).await, "<h1>docs</h1>");

        let response = server.serve("/", &HeaderMap::new()).await;
        assert_eq!(body(response).await, "<h1>home</h1>");
    }

    #[tokio::test]
    async fn test_directory_without_index_is_not_found() {
        let dir = fixture();
        let server = server(dir.path());
        let response = server.serve("/empty", &HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = fixture();
        let server = server(dir.path());
        let response = server.serve("/nope.txt", &HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(server.store().is_empty());
    }

    #[tokio::test]
    async fn test_nul_byte_path_is_not_found() {
        let dir = fixture();
        let response = server(dir.path())
            .serve("/docs/readme.txt\0", &HeaderMap::new())
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_traversal_stays_inside_root() {
        let outer = tempfile::tempdir().unwrap();
        std::fs::write(outer.path().join("secret.txt"), "secret").unwrap();
        std::fs::create_dir(outer.path().join("site")).unwrap();
        let server = server(&outer.path().join("site"));

        let response = server.serve("/../secret.txt", &HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_mount_prefix_is_kept_in_redirects() {
        let dir = fixture();
        let server = server(dir.path()).with_mount("/~/");

        let response = server.serve("/docs/", &HeaderMap::new()).await;
        assert_eq!(location(&response), "/~/docs");

        let response = server.serve("/index.html", &HeaderMap::new()).await;
        assert_eq!(location(&response), "/~/");
    }

    #[tokio::test]
    async fn test_redirect_location_is_encoded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("my docs")).unwrap();
        let server = server(dir.path());

        let response = server.serve("/my docs/", &HeaderMap::new()).await;
        assert_eq!(location(&response), "/my%20docs");
    }

    #[tokio::test]
    async fn test_range_on_cached_entry() {
        let dir = fixture();
        let server = server(dir.path());
        server.serve("/docs/readme.txt", &HeaderMap::new()).await;

        let mut headers = HeaderMap::new();
        headers.insert(header::RANGE, "bytes=0-3".parse().unwrap());
        let response = server.serve("/docs/readme.txt", &headers).await;
        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(body(response).await, "read");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_misses_converge() {
        let dir = fixture();
        let server = Arc::new(server(dir.path()));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let server = Arc::clone(&server);
            handles.push(tokio::spawn(async move {
                let response = server.serve("/docs/readme.txt", &HeaderMap::new()).await;
                body(response).await
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), "read me");
        }
        assert_eq!(server.store().len(), 1);
    }
}
