//! Config-file source discovery.
//!
//! Order: explicit path > `./termprint.toml` > user config dir > defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from the `--config` path.
    Explicit(PathBuf),
    /// Loaded from `./termprint.toml`.
    Local,
    /// Loaded from `<config_dir>/termprint/termprint.toml`.
    Global(PathBuf),
    /// No file found.
    BuiltInDefaults,
}

/// Read config text from the highest-precedence available source.
///
/// A missing explicit path is an error; missing implicit files are skipped.
pub(super) fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

/// User config root (`$XDG_CONFIG_HOME` or platform equivalent).
pub(super) fn config_root_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

/// Default per-user config path.
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
