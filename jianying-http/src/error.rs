use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("failed to read \"{}\": {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to get local address: {0}")]
    LocalAddr(io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
