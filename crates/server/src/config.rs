//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Dataset file read on every request when none is configured
pub const DEFAULT_DATASET: &str = "imdb_top_1000.csv";
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 5000;

/// Everything the web app needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Movie table, reloaded on each request
    pub dataset_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn new(dataset_path: impl Into<PathBuf>, host: IpAddr, port: u16) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            bind_addr: SocketAddr::new(host, port),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET, DEFAULT_HOST, DEFAULT_PORT)
    }
}
