use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Server configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one subdirectory per rule category.
    pub rules_root: String,
    /// `host:port` to serve MCP over TCP. `None` serves on stdio.
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Required:
    /// - `RULES_ROOT`: path to the rules directory
    ///
    /// Optional:
    /// - `MCP_TCP_LISTEN_ADDR`: serve on TCP instead of stdio
    pub fn from_env() -> Result<Self, AppError> {
        let rules_root = std::env::var("RULES_ROOT").map_err(|_| {
            AppError::Config("RULES_ROOT environment variable is required".to_string())
        })?;
        Self::new(rules_root, std::env::var("MCP_TCP_LISTEN_ADDR").ok())
    }

    pub fn new(rules_root: String, tcp_listen_addr: Option<String>) -> Result<Self, AppError> {
        if !Path::new(&rules_root).is_dir() {
            return Err(AppError::Config(format!(
                "rules root is not a directory: {rules_root}"
            )));
        }

        Ok(Self {
            rules_root,
            tcp_listen_addr,
        })
    }

    pub fn rules_root(&self) -> PathBuf {
        Path::new(&self.rules_root).to_path_buf()
    }
}
