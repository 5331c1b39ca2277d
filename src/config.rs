//! Server configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::content::FileFormats;

/// Extensions served when no formats are configured
pub fn default_file_formats() -> FileFormats {
    FileFormats::new([".mp4", ".mov"])
}

/// Media library configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Root directory of the media library
    pub source: PathBuf,

    /// Accepted media extensions, each with its leading `.`
    pub file_formats: FileFormats,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            file_formats: default_file_formats(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Media library configuration
    pub media: MediaConfig,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            media: MediaConfig::default(),
            cors_enabled: true,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.media.file_formats.accepts("clip.mp4"));
        assert!(config.media.file_formats.accepts("clip.mov"));
        assert!(!config.media.file_formats.accepts("clip.mkv"));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    }
}
