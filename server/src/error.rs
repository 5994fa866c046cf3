use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listen address {host}:{port}")]
    InvalidAddress {
        host: String,
        port: u16,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped unexpectedly")]
    Serve(#[source] std::io::Error),
}
