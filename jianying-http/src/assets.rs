use std::collections::HashMap;
use std::path::{Path, PathBuf};

use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, warn};

use crate::error::ServerError;

/// Pre-rendered HTTP/1.1 response, kept in memory for the lifetime of the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    head: Vec<u8>,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, reason: &str, content_type: &str, body: Vec<u8>) -> Self {
        let head = format!(
            "HTTP/1.1 {status} {reason}\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
            body.len()
        );
        Self {
            status,
            head: head.into_bytes(),
            body,
        }
    }

    pub fn ok(content_type: &str, body: Vec<u8>) -> Self {
        Self::new(200, "OK", content_type, body)
    }

    pub fn not_found() -> Self {
        Self::new(404, "Not Found", "text/plain;charset=UTF-8", b"not found".to_vec())
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            405,
            "Method Not Allowed",
            "text/plain;charset=UTF-8",
            b"method not allowed".to_vec(),
        )
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn to_bytes(&self, include_body: bool) -> Vec<u8> {
        if include_body {
            [self.head.as_slice(), self.body.as_slice()].concat()
        } else {
            self.head.clone()
        }
    }
}

pub fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("html") => "text/html;charset=UTF-8",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("wasm") => "application/wasm",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("json") => "application/json",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

/// Reads every file under `dir` into a response keyed by its url path, e.g. `/pkg/jianying.wasm`.
pub fn load_assets(dir: PathBuf, route_prefix: String) -> BoxFuture<'static, Result<HashMap<String, Response>, ServerError>> {
    async move {
        let mut responses = HashMap::new();
        debug!("reading {}", dir.display());

        let mut entries = tokio::fs::read_dir(&dir).await.map_err(|source| ServerError::Read {
            path: dir.clone(),
            source,
        })?;

        while let Some(entry) = entries.next_entry().await.map_err(|source| ServerError::Read {
            path: dir.clone(),
            source,
        })? {
            let path = entry.path();
            let Some(name) = entry.file_name().to_str().map(String::from) else {
                warn!("skipping non utf-8 file name in {}", dir.display());
                continue;
            };
            let route = format!("{}/{}", route_prefix, name);

            let kind = entry.file_type().await.map_err(|source| ServerError::Read {
                path: path.clone(),
                source,
            })?;

            if kind.is_dir() {
                responses.extend(load_assets(path, route).await?);
            } else if kind.is_file() {
                let bytes = tokio::fs::read(&path).await.map_err(|source| ServerError::Read {
                    path: path.clone(),
                    source,
                })?;
                responses.insert(route, Response::ok(content_type(&path), bytes));
            }
        }

        Ok(responses)
    }
    .boxed()
}
