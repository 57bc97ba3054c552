//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration for [`crate::server::run`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) data_dir: PathBuf,
    pub(crate) cookie_secure: bool,
}

impl ServerConfig {
    /// Assemble a configuration from its parts.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, data_dir: PathBuf, cookie_secure: bool) -> Self {
        Self {
            bind_addr,
            data_dir,
            cookie_secure,
        }
    }

    /// Address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Directory holding the JSON collection files.
    #[must_use]
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}
