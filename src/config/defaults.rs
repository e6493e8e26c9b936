//! Built-in configuration constants.

/// Config file name looked up locally and under the user config dir.
pub const CONFIG_FILE_NAME: &str = "termprint.toml";
/// Subdirectory of the user config dir holding [`CONFIG_FILE_NAME`].
pub const CONFIG_DIR_NAME: &str = "termprint";

pub const ENV_TARGET: &str = "TERMPRINT_TARGET";
pub const ENV_COLUMNS: &str = "TERMPRINT_COLUMNS";
pub const ENV_NO_COLOR: &str = "NO_COLOR";
pub const ENV_SHELL: &str = "SHELL";

/// Reported when `$SHELL` is unset or empty.
pub const UNKNOWN_SHELL: &str = "unknown";
