//! Configuration for the twinload-build loader.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`TWINLOAD__` prefix, `__` separator)
//! 2. Config file (`<prefix>.toml`, default `twinload.toml`)
//! 3. Defaults

use serde::Deserialize;

use twinload_graph::GraphConfig;

/// Top-level loader configuration.
///
/// Loaded from the `[build]` section or `TWINLOAD__BUILD__` variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildConfig {
    /// When the relationship type registration is waited on.
    #[serde(default)]
    pub registration: RegistrationMode,
}

/// How the relationship type registration is sequenced against the row loop.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationMode {
    /// Registration completes before the first entity is created.
    #[default]
    Awaited,
    /// Registration is spawned and runs alongside the row loop; its outcome
    /// is collected once every row has been processed.
    Detached,
}

fn load(file_prefix: &str) -> Result<config::Config, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("TWINLOAD")
                .separator("__")
                .try_parsing(true),
        )
        .build()
}

/// Load the `[build]` section, falling back to defaults.
pub fn load_build_config(file_prefix: &str) -> BuildConfig {
    match load(file_prefix).and_then(|c| c.get::<BuildConfig>("build")) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(error = %e, "No usable [build] config, using defaults");
            BuildConfig::default()
        }
    }
}

/// Load the `[aws]` section, falling back to the SDK's own provider chain.
pub fn load_graph_config(file_prefix: &str) -> GraphConfig {
    match load(file_prefix).and_then(|c| c.get::<GraphConfig>("aws")) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(error = %e, "No usable [aws] config, using defaults");
            GraphConfig::default()
        }
    }
}
