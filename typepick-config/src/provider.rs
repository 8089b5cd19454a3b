//! Settings provider using Figment

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use serde::Deserialize;
use tracing::{debug, info, trace};
use typepick_fields::{FieldSettings, StoredValue, Variant};

use crate::{
    discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery},
    error::ConfigError,
    ConfigResult,
};

/// Environment variable prefix for settings overrides, e.g. `TYPEPICK_VARIANT`.
pub const ENV_PREFIX: &str = "TYPEPICK_";

/// Settings as merged from every source, before legacy keys are resolved.
///
/// Sources may use either `allow_list`/`variant` or the legacy
/// `post_type`/`select_type` keys. The current key wins when both are set.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    allow_list: Option<StoredValue>,
    post_type: Option<StoredValue>,
    variant: Option<Variant>,
    select_type: Option<Variant>,
    class: Option<String>,
}

impl RawSettings {
    fn into_settings(self) -> FieldSettings {
        let defaults = FieldSettings::default();
        FieldSettings {
            allow_list: self
                .allow_list
                .or(self.post_type)
                .unwrap_or(defaults.allow_list),
            variant: self
                .variant
                .or(self.select_type)
                .unwrap_or(defaults.variant),
            class: self.class.unwrap_or(defaults.class),
        }
    }
}

/// Loads field settings from defaults, settings files and the environment.
///
/// Nothing is cached; each call reads the sources again.
pub struct ConfigProvider {
    discovery: FileDiscovery,
    explicit_file: Option<PathBuf>,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self {
            discovery: FileDiscovery::new(),
            explicit_file: None,
        }
    }

    /// Replace the directory discovery used for settings files.
    pub fn with_discovery(mut self, discovery: FileDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    /// Merge `path` above any discovered files. It must exist.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Load the field settings from all sources.
    pub fn load_settings(&self) -> ConfigResult<FieldSettings> {
        let raw: RawSettings = self.build_figment()?.extract()?;
        let settings = raw.into_settings();
        info!(
            variant = %settings.variant,
            restricted = !settings.allow_list.is_blank(),
            "loaded field settings"
        );
        Ok(settings)
    }

    /// Sources in precedence order, later overriding earlier:
    /// 1. discovered files (global, then project)
    /// 2. the explicit file, if any
    /// 3. `TYPEPICK_` environment variables
    ///
    /// Keys no source sets fall back to `FieldSettings::default()`.
    fn build_figment(&self) -> ConfigResult<Figment> {
        debug!("Building figment configuration with precedence order");

        let mut figment = Figment::new();
        for file in self.discovery.discover_all() {
            figment = figment.merge(Self::load_config_file(&file));
        }
        if let Some(file) = self.explicit_config_file()? {
            figment = figment.merge(Self::load_config_file(&file));
        }
        Ok(figment.merge(Self::load_env_vars()))
    }

    fn explicit_config_file(&self) -> ConfigResult<Option<ConfigFile>> {
        let Some(path) = &self.explicit_file else {
            return Ok(None);
        };
        if !path.is_file() {
            return Err(ConfigError::FileNotFound { path: path.clone() });
        }
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat { path: path.clone() })?;
        Ok(Some(ConfigFile::new(
            path.clone(),
            format,
            ConfigScope::Explicit,
        )))
    }

    fn load_config_file(config_file: &ConfigFile) -> Figment {
        let path: &Path = &config_file.path;
        trace!("Loading settings file: {} ({:?})", path.display(), config_file.format);
        match config_file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }

    fn load_env_vars() -> Figment {
        debug!("Loading environment variables");
        Figment::new().merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()))
    }
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}
