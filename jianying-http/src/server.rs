use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use crate::assets::{load_assets, Response};
use crate::config::ServerConfig;
use crate::error::ServerError;

const REQUEST_BUFFER_SIZE: usize = 8192;

/// Everything the server can answer with, read once at startup.
#[derive(Debug)]
pub struct Site {
    index: Response,
    assets: HashMap<String, Response>,
    not_found: Response,
    method_not_allowed: Response,
}

pub struct Routed<'a> {
    pub response: &'a Response,
    pub include_body: bool,
}

impl Site {
    pub fn new(index_html: Vec<u8>, assets: HashMap<String, Response>) -> Self {
        Self {
            index: Response::ok("text/html;charset=UTF-8", index_html),
            assets,
            not_found: Response::not_found(),
            method_not_allowed: Response::method_not_allowed(),
        }
    }

    pub async fn load(config: &ServerConfig) -> Result<Self, ServerError> {
        let index_html = tokio::fs::read(&config.index_file)
            .await
            .map_err(|source| ServerError::Read {
                path: config.index_file.clone(),
                source,
            })?;
        let assets = load_assets(config.site_root.clone(), String::new()).await?;
        debug!("loaded {} assets from {}", assets.len(), config.site_root.display());

        Ok(Self::new(index_html, assets))
    }

    pub fn route(&self, method: &str, path: &str) -> Routed<'_> {
        let include_body = method != "HEAD";
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();

        let response = if method != "GET" && method != "HEAD" {
            &self.method_not_allowed
        } else if path.is_empty() || path == "/" || path == "/index.html" {
            &self.index
        } else {
            self.assets.get(path).unwrap_or(&self.not_found)
        };

        Routed {
            response,
            include_body,
        }
    }
}

pub struct Server {
    listener: TcpListener,
    site: Arc<Site>,
}

impl Server {
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let site = Site::load(config).await?;
        let listener = TcpListener::bind(config.site_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: config.site_addr,
                source,
            })?;

        Ok(Self {
            listener,
            site: Arc::new(site),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr().map_err(ServerError::LocalAddr)
    }

    pub async fn run(self, cancellation_token: CancellationToken) {
        loop {
            select! {
                result = self.listener.accept() => {
                    let (stream, addr) = match result {
                        Ok(v) => v,
                        Err(err) => {
                            debug!("tcp accept err: {err}");
                            continue;
                        }
                    };

                    let site = self.site.clone();
                    tokio::spawn(async move {
                        handle_connection(stream, addr, &site).await;
                    });
                }
                _ = cancellation_token.cancelled() => {
                    info!("server stopped");
                    break;
                }
            }
        }
    }
}

pub async fn create_server(cancellation_token: CancellationToken, config: &ServerConfig) -> Result<(), ServerError> {
    let server = Server::bind(config).await?;
    info!("serving {} on http://{}", config.site_root.display(), server.local_addr()?);
    server.run(cancellation_token).await;
    Ok(())
}

async fn handle_connection(mut stream: TcpStream, addr: SocketAddr, site: &Site) {
    let mut buff = [0_u8; REQUEST_BUFFER_SIZE];
    let mut filled = 0;
    loop {
        if filled == buff.len() {
            debug!("{addr}: request head too large");
            return;
        }
        let size = match stream.read(&mut buff[filled..]).await {
            Ok(0) => {
                debug!("{addr}: closed before request was complete");
                return;
            }
            Ok(size) => size,
            Err(err) => {
                debug!("tcp read err: {err}");
                return;
            }
        };
        filled += size;

        let mut headers = [httparse::EMPTY_HEADER; 64];
        let mut req = httparse::Request::new(&mut headers);
        match req.parse(&buff[..filled]) {
            Ok(httparse::Status::Complete(_)) => break,
            Ok(httparse::Status::Partial) => {
                trace!("{addr}: partial request, {filled} bytes so far");
            }
            Err(err) => {
                debug!("{addr}: bad request: {err}");
                return;
            }
        }
    }

    let mut headers = [httparse::EMPTY_HEADER; 64];
    let mut req = httparse::Request::new(&mut headers);
    if let Err(err) = req.parse(&buff[..filled]) {
        debug!("{addr}: bad request: {err}");
        return;
    }

    let (Some(method), Some(path)) = (req.method, req.path) else {
        debug!("{addr}: request line incomplete");
        return;
    };

    let routed = site.route(method, path);
    trace!("{addr}: {method} {path} -> {}", routed.response.status);

    let bytes = routed.response.to_bytes(routed.include_body);
    if let Err(err) = stream.write_all(&bytes).await {
        debug!("writing to stream err: {err}");
        return;
    }
    if let Err(err) = stream.shutdown().await {
        trace!("tcp shutdown err: {err}");
    }
}
