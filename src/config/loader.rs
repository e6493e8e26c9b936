//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::apply_env_overrides;
use super::sources::{config_root_dir, read_config_text, ConfigSource};
use super::types::FileConfig;
use super::Config;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
    .map(|(config, _)| config)
}

/// Loader with injectable file, environment, and config-root lookups.
pub fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<(Config, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text(path_override, &read_file, &config_root)?;
    tracing::debug!(?source, "config source resolved");
    let parsed: FileConfig = toml::from_str(&text)?;
    let mut config = resolve(parsed)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    Ok((config, source))
}

/// Fold file values onto the built-in defaults.
pub(super) fn resolve(file: FileConfig) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    let display = &mut config.display;

    if let Some(color) = file.display.color {
        display.color = color;
    }
    if let Some(target) = file.display.target {
        display.target = target;
    }
    if let Some(columns) = file.display.default_columns {
        if columns == 0 {
            return Err(ConfigError::Invalid(
                "display.default_columns must be positive".into(),
            ));
        }
        display.default_columns = columns;
    }
    if let Some(fill) = file.progress.fill {
        display.progress_fill = non_empty("progress.fill", fill)?;
    }
    if let Some(pending) = file.progress.pending {
        display.progress_pending = non_empty("progress.pending", pending)?;
    }
    if let Some(spacing) = file.help.spacing {
        display.help_spacing = spacing;
    }

    let solid = file.progress.solid.unwrap_or(false);
    if solid && display.progress_fill != crate::tui::settings::PROGRESS_FILL {
        let fill = &display.progress_fill;
        tracing::warn!(fill = %fill, "progress.solid is set; ignoring progress.fill");
    }
    config.solid_progress = solid;
    Ok(config)
}

fn non_empty(key: &str, value: String) -> Result<String, ConfigError> {
    if value.is_empty() {
        Err(ConfigError::Invalid(format!("{key} must not be empty")))
    } else {
        Ok(value)
    }
}
