//! Settings for Glyphs
//!
//! Read-only configuration layered with figment: built-in defaults, then an
//! optional `glyphs.toml` in the platform config directory, then `GLYPHS_`
//! environment variables. Nothing is ever written back.

use crate::error::Result;
use crate::theme::ThemeVariant;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "glyphs.toml";
pub const ENV_PREFIX: &str = "GLYPHS_";

const DEFAULT_CANVAS_WIDTH: u16 = 96;
const DEFAULT_CANVAS_HEIGHT: u16 = 9;
const DEFAULT_FILLER: &str = "猫咪";

/// Fixed drawing area the tab bar and dialog are laid out in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    /// Target width of the tab bar and the dialog canvas
    pub width: u16,
    /// Minimum height of the dialog canvas
    pub height: u16,
    /// Pattern repeated over unused canvas space
    pub filler: String,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            filler: DEFAULT_FILLER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeVariant,
    pub canvas: Canvas,
}

/// Platform directories for config and log files
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "glyphs")
}

impl Settings {
    /// All configuration sources, lowest priority first
    pub fn figment() -> Figment {
        let dirs = project_dirs();
        Self::figment_in(dirs.as_ref().map(ProjectDirs::config_dir))
    }

    /// Sources with `glyphs.toml` looked up in `config_dir` only
    pub fn figment_in(config_dir: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if let Some(dir) = config_dir {
            figment = figment.merge(Toml::file(dir.join(CONFIG_FILE)));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }
}
