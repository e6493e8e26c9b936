//! Environment overrides applied after the file is resolved.

use crate::color::RenderTarget;
use crate::error::ConfigError;

use super::defaults::{ENV_COLUMNS, ENV_NO_COLOR, ENV_SHELL, ENV_TARGET, UNKNOWN_SHELL};
use super::Config;

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(raw) = env_lookup(ENV_TARGET) {
        config.display.target = raw
            .parse::<RenderTarget>()
            .map_err(|e| ConfigError::Invalid(format!("{ENV_TARGET}: {e}")))?;
    }
    if let Some(raw) = env_lookup(ENV_COLUMNS) {
        config.display.default_columns = parse_columns(&raw).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid {ENV_COLUMNS} value `{raw}`: expected a positive integer"
            ))
        })?;
    }
    if env_lookup(ENV_NO_COLOR).is_some() {
        config.display.color = false;
    }
    Ok(())
}

fn parse_columns(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// Login shell from `$SHELL`, or `"unknown"`.
pub fn detect_shell<FEnv>(env_lookup: FEnv) -> String
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(ENV_SHELL)
        .map(|shell| shell.trim().to_string())
        .filter(|shell| !shell.is_empty())
        .unwrap_or_else(|| UNKNOWN_SHELL.to_string())
}
