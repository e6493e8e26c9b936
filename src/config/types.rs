//! Configuration data model.
//!
//! `FileConfig` mirrors the TOML file with every key optional; the loader
//! folds it onto the built-in defaults to produce a [`Config`].

use serde::Deserialize;

use crate::color::RenderTarget;
use crate::tui::settings::DisplaySettings;

/// Resolved runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub display: DisplaySettings,
    /// Paint the progress fill as a white-background space.
    pub solid_progress: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub display: DisplaySection,
    pub progress: ProgressSection,
    pub help: HelpSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct DisplaySection {
    pub color: Option<bool>,
    pub target: Option<RenderTarget>,
    pub default_columns: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct ProgressSection {
    pub fill: Option<String>,
    pub pending: Option<String>,
    pub solid: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct HelpSection {
    pub spacing: Option<usize>,
}
