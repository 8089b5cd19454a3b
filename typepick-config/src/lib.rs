//! Selector field settings using Figment
//!
//! Loads `FieldSettings` (allow-list, variant, input class) from layered
//! sources with clear precedence:
//!
//! defaults → `~/.typepick/` → `./.typepick/` → explicit file → `TYPEPICK_*` env
//!
//! Files may be TOML, YAML or JSON and are named `typepick.*` or `field.*`.
//! The legacy setting keys `post_type` and `select_type` are accepted as
//! aliases for `allow_list` and `variant`.
//!
//! ```no_run
//! use typepick_config::load_settings;
//!
//! let settings = load_settings(None)?;
//! println!("variant: {}", settings.variant);
//! # Ok::<(), typepick_config::ConfigError>(())
//! ```

pub mod discovery;
pub mod error;
pub mod provider;

#[cfg(test)]
mod tests;

use std::path::Path;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::ConfigError;
pub use provider::{ConfigProvider, ENV_PREFIX};
pub use typepick_fields::FieldSettings;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load settings from all sources, with `file` merged above discovered files.
pub fn load_settings(file: Option<&Path>) -> ConfigResult<FieldSettings> {
    let provider = ConfigProvider::new();
    match file {
        Some(path) => provider.with_file(path).load_settings(),
        None => provider.load_settings(),
    }
}
