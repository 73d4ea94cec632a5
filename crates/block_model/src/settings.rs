//! Editor settings
//!
//! Settings are read from `settings.json` in the editor's data directory.
//! Missing keys take their defaults.

use crate::{Breakpoint, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the settings inside the data directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Font used when no style layer sets `fontFamily`
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Page editor settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorSettings {
    /// Breakpoint active when the editor opens
    pub default_breakpoint: Breakpoint,
    /// Canvas width in pixels for each breakpoint
    pub desktop_width: u32,
    pub tablet_width: u32,
    pub mobile_width: u32,
    pub default_font_family: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_breakpoint: Breakpoint::Base,
            desktop_width: 1400,
            tablet_width: 800,
            mobile_width: 420,
            default_font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl EditorSettings {
    /// Breakpoint whose canvas a page of `width` pixels renders in
    pub fn breakpoint_for_width(&self, width: u32) -> Breakpoint {
        if width <= self.mobile_width {
            Breakpoint::Mobile
        } else if width <= self.tablet_width {
            Breakpoint::Tablet
        } else {
            Breakpoint::Base
        }
    }

    /// Read settings from `data_dir`.
    ///
    /// A missing file gives the defaults. A file that is not valid settings
    /// JSON is logged and also gives the defaults; only IO failures are errors.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(SETTINGS_FILE);
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {}, using defaults: {}", path.display(), e);
            Self::default()
        }))
    }

    /// Canvas width of a breakpoint
    pub fn width_of(&self, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Base => self.desktop_width,
            Breakpoint::Tablet => self.tablet_width,
            Breakpoint::Mobile => self.mobile_width,
        }
    }
}
