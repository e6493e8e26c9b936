//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`TERMPRINT_TARGET`, `TERMPRINT_COLUMNS`, `NO_COLOR`)
//! 2. TOML file specified via `--config`
//! 3. `./termprint.toml` in the current directory
//! 4. `$XDG_CONFIG_HOME/termprint/termprint.toml` (or the platform equivalent)
//! 5. Built-in defaults

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use env::detect_shell;
pub use loader::{load_config, load_config_from_sources};
pub use sources::{default_global_config_path, ConfigSource};
pub use types::Config;
