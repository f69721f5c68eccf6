use crate::config::GlintConfig;
use crate::error::{ConfigError, Result};
use std::net::IpAddr;

/// Parse the bind host as an IP address.
pub(crate) fn parse_host(host: &str) -> Result<IpAddr> {
    host.parse::<IpAddr>().map_err(|_| {
        ConfigError::InvalidValue {
            field: "host".to_string(),
            value: host.to_string(),
            hint: "Use an IP address such as 127.0.0.1 or 0.0.0.0".to_string(),
        }
        .into()
    })
}

impl GlintConfig {
    /// Validate configuration for logical consistency.
    ///
    /// The watch directory is not checked here: a missing one only disables
    /// live reload, it never stops the server.
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "debounceMs".to_string(),
                value: "0".to_string(),
                hint: "Debounce must be at least 1 millisecond".to_string(),
            }
            .into());
        }

        if !self.root.is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "root".to_string(),
                value: self.root.display().to_string(),
                hint: "The serve root must be an existing directory".to_string(),
            }
            .into());
        }

        parse_host(&self.host)?;

        Ok(())
    }
}
