use crate::cli::Cli;
use crate::config::{CliOverrides, GlintConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use std::path::Path;

/// Config file picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "glint.config.json";

/// Single-word keys accepted from `GLINT_*` variables.
const GLINT_ENV_KEYS: [&str; 5] = ["port", "host", "watch", "root", "index"];

impl GlintConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > `GLINT_*` env > `PORT`/`WATCH` env > config file > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        // An explicit --config must exist; the implicit one is optional
        let config_file = match &cli.config {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.clone()).into());
            }
            Some(path) => Some(path.clone()),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(Env::raw().only(&["PORT", "WATCH"]));
        figment = figment.merge(Env::prefixed("GLINT_").only(&GLINT_ENV_KEYS));

        // Env keys come out lowercased, so the camelCase key is merged by hand
        if let Some(raw) = std::env::var_os("GLINT_DEBOUNCE_MS") {
            let raw = raw.to_string_lossy();
            let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "GLINT_DEBOUNCE_MS".to_string(),
                value: raw.to_string(),
                hint: "Use a whole number of milliseconds, e.g. 100".to_string(),
            })?;
            figment = figment.merge(("debounceMs", ms));
        }

        // CLI flags override everything, but only the ones actually given
        figment = figment.merge(Serialized::defaults(CliOverrides::from(cli)));

        let mut config: Self = figment
            .extract()
            .map_err(|e| ConfigError::Extract(e.to_string()))?;

        // `WATCH=` means no watching, not watching ""
        config.watch = config.watch.filter(|dir| !dir.as_os_str().is_empty());

        Ok(config)
    }
}
