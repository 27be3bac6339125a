//! HTTP Server Configuration
//!
//! Bind address, CORS origins, where the book routes are mounted and
//! whether the store starts with seed data.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Path the book routes are mounted under (default: "/books")
    #[serde(default = "default_books_prefix")]
    pub books_prefix: String,

    /// Load the seed books at startup (default: true)
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_books_prefix() -> String {
    "/books".to_string()
}

fn default_seed() -> bool {
    true
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            books_prefix: default_books_prefix(),
            seed: default_seed(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when the book routes sit at the root instead of a nested path
    pub fn books_at_root(&self) -> bool {
        self.books_prefix == "/"
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }

        if !self.books_prefix.starts_with('/') {
            return Err(format!(
                "books_prefix must start with '/': '{}'",
                self.books_prefix
            ));
        }

        if !self.books_at_root() && self.books_prefix.ends_with('/') {
            return Err(format!(
                "books_prefix must not end with '/': '{}'",
                self.books_prefix
            ));
        }

        Ok(())
    }
}
