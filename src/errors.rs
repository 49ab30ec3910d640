use std::{io, net::SocketAddr};

use thiserror::Error;

use crate::config::ConfigError;

/// Failures that stop the process before or while serving. All of them are
/// fatal; `main` logs the error and exits non-zero.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl StartupError {
    pub fn bind(addr: SocketAddr, source: io::Error) -> Self {
        Self::Bind { addr, source }
    }
}
