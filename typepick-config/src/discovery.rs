//! Settings file discovery
//!
//! Field settings may live in a global `~/.typepick/` directory and a project
//! `./.typepick/` directory. Project files take precedence over global ones.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Recognized settings file names, lowest precedence first within a directory.
const FILE_NAMES: [&str; 8] = [
    "typepick.toml",
    "typepick.yaml",
    "typepick.yml",
    "typepick.json",
    "field.toml",
    "field.yaml",
    "field.yml",
    "field.json",
];

/// A discovered settings file with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub scope: ConfigScope,
    /// Higher values take precedence
    pub priority: u8,
}

impl ConfigFile {
    pub fn new(path: PathBuf, format: ConfigFormat, scope: ConfigScope) -> Self {
        let priority = scope.priority();
        Self {
            path,
            format,
            scope,
            priority,
        }
    }
}

/// Settings file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Where a settings file was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// ~/.typepick/
    Global,
    /// ./.typepick/
    Project,
    /// Passed explicitly by the caller
    Explicit,
}

impl ConfigScope {
    /// Get priority value for this scope (higher values override lower ones)
    pub fn priority(self) -> u8 {
        match self {
            Self::Global => 10,
            Self::Project => 20,
            Self::Explicit => 30,
        }
    }
}

/// Finds settings files in the global and project directories
#[derive(Debug, Clone, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
    /// Skip directory resolution entirely
    disabled: bool,
}

impl FileDiscovery {
    /// Discovery rooted at the current directory and the home directory,
    /// resolved lazily at `discover_all` time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovery over explicit directories only.
    pub fn with_directories(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
            disabled: false,
        }
    }

    /// Discovery that never finds anything.
    pub fn disabled() -> Self {
        Self {
            project_dir: None,
            global_dir: None,
            disabled: true,
        }
    }

    /// Discover all settings files, lowest priority first for figment merging.
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        if self.disabled {
            return Vec::new();
        }

        let explicit = self.project_dir.is_some() || self.global_dir.is_some();
        let project_dir = if explicit {
            self.project_dir.clone()
        } else {
            Self::resolve_project_dir()
        };
        let global_dir = if explicit {
            self.global_dir.clone()
        } else {
            Self::resolve_global_dir()
        };

        let mut files = Vec::new();
        if let Some(ref dir) = global_dir {
            files.extend(self.search_directory(dir, ConfigScope::Global));
        }
        if let Some(ref dir) = project_dir {
            files.extend(self.search_directory(dir, ConfigScope::Project));
        }

        // stable sort keeps in-directory file name order
        files.sort_by_key(|f| f.priority);

        debug!("Discovered {} settings files", files.len());
        for file in &files {
            trace!("Found settings: {} ({:?})", file.path.display(), file.format);
        }
        files
    }

    fn search_directory(&self, dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        if !dir.exists() {
            debug!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }
        if !dir.is_dir() {
            warn!("Path exists but is not a directory: {}", dir.display());
            return Vec::new();
        }

        FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .filter(|candidate| candidate.is_file())
            .filter_map(|candidate| {
                let format = ConfigFormat::from_path(&candidate)?;
                Some(ConfigFile::new(candidate, format, scope))
            })
            .collect()
    }

    fn resolve_project_dir() -> Option<PathBuf> {
        let dir = std::env::current_dir().ok()?.join(".typepick");
        dir.is_dir().then_some(dir)
    }

    fn resolve_global_dir() -> Option<PathBuf> {
        let dir = dirs::home_dir()?.join(".typepick");
        dir.is_dir().then_some(dir)
    }
}
