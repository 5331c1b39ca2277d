//! Configuration file support
//!
//! Loads server configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{default_file_formats, LogFormat, MediaConfig, ServerConfig};
use crate::content::FileFormats;
use crate::error::{CatalogError, Result};

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Server settings
    pub server: ServerSettings,
    /// Media library settings
    pub media: MediaSettings,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS
    pub cors_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSettings {
    /// Root directory of the media library
    pub source: PathBuf,
    /// Accepted media extensions
    pub file_formats: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<LogFormat>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CatalogError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8000,
                cors_enabled: Some(true),
            },
            media: MediaSettings {
                source: PathBuf::from("."),
                file_formats: Some(default_file_formats().iter().map(str::to_string).collect()),
            },
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some(LogFormat::Pretty),
            }),
        }
    }

    /// Convert to ServerConfig
    pub fn into_server_config(self) -> Result<ServerConfig> {
        let file_formats = match self.media.file_formats {
            Some(formats) => {
                if let Some(bad) = formats.iter().find(|f| !f.starts_with('.') || f.len() < 2) {
                    return Err(CatalogError::Config(format!(
                        "file format {:?} must be an extension with its leading '.'",
                        bad
                    )));
                }
                FileFormats::new(formats)
            }
            None => default_file_formats(),
        };

        let (log_level, log_format) = match self.logging {
            Some(l) => (l.level, l.format.unwrap_or_default()),
            None => ("info".to_string(), LogFormat::default()),
        };

        Ok(ServerConfig {
            host: self.server.host,
            port: self.server.port,
            media: MediaConfig {
                source: self.media.source,
                file_formats,
            },
            cors_enabled: self.server.cors_enabled.unwrap_or(true),
            log_level,
            log_format,
        })
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
