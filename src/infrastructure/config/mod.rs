// ============================================================
// CONFIG LOADING
// ============================================================
// Layered engine configuration: defaults <- TOML file <- environment

use crate::domain::dataset::EngineConfig;
use crate::domain::error::{AppError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use once_cell::sync::Lazy;

static RESOLVED: Lazy<EngineConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        tracing::warn!(error = %e, "invalid engine config, falling back to defaults");
        EngineConfig::default()
    }
});

/// Name of the optional TOML config file looked up in the working
/// directory.
pub const CONFIG_FILE: &str = "datalimpia.toml";

/// Environment variable prefix, e.g. `DATALIMPIA_TYPE_SAMPLE_ROWS=50`.
pub const ENV_PREFIX: &str = "DATALIMPIA_";

/// Resolve the engine configuration: built-in defaults, overridden by an
/// optional `datalimpia.toml`, overridden by `DATALIMPIA_*` environment
/// variables. The merged result is validated before use.
pub fn load_config() -> Result<EngineConfig> {
    let config: EngineConfig = Figment::from(Serialized::defaults(EngineConfig::default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .map_err(|e| AppError::Validation(format!("Invalid engine config: {}", e)))?;

    config.validate().map_err(AppError::Validation)?;
    Ok(config)
}

/// Environment-resolved configuration, loaded once per process. Invalid
/// overrides fall back to the defaults with a warning rather than
/// poisoning every consumer.
pub fn resolved() -> &'static EngineConfig {
    &RESOLVED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults() {
        let config = load_config().unwrap();
        assert_eq!(config.type_sample_rows, 100);
        assert_eq!(config.text_fill_value, "n/a");
        assert!(!config.strict_coercion);
    }
}
