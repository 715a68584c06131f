/// Editor configuration: load, sanitize, and print.
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Smallest and largest accepted tab width.
const TAB_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 1..=16;

/// Top-level editor configuration.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Columns kept visible left of the cursor after a horizontal jump.
    pub left_margin: usize,
    /// Columns reserved at the right edge before the view jumps a page.
    pub right_margin: usize,
    /// Glyph leading the cursor's row while the view is scrolled sideways.
    pub scroll_marker: char,
    /// Glyph ending lines wider than the window.
    pub overflow_marker: char,
    /// Spaces inserted by the Tab key.
    pub tab_width: usize,
    /// Whether the bottom terminal row shows file name and position.
    pub show_status_bar: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            left_margin: 5,
            right_margin: 2,
            scroll_marker: '↞',
            overflow_marker: '↠',
            tab_width: 4,
            show_status_bar: true,
        }
    }
}

impl EditorConfig {
    /// Loads config from `path`.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<EditorConfig>(&contents) {
                Ok(mut config) => {
                    config.sanitize();
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {e}", path.display());
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {e}", path.display());
            }
        }
        Self::default()
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        // A struct of plain fields always serializes.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Clamps out-of-range values.
    pub fn sanitize(&mut self) {
        let clamped = self
            .tab_width
            .clamp(*TAB_WIDTH_RANGE.start(), *TAB_WIDTH_RANGE.end());
        if clamped != self.tab_width {
            tracing::warn!("tab_width {} out of range, using {clamped}", self.tab_width);
            self.tab_width = clamped;
        }
        let defaults = Self::default();
        if self.scroll_marker.is_control() {
            tracing::warn!("scroll_marker {:?} is a control character", self.scroll_marker);
            self.scroll_marker = defaults.scroll_marker;
        }
        if self.overflow_marker.is_control() {
            tracing::warn!("overflow_marker {:?} is a control character", self.overflow_marker);
            self.overflow_marker = defaults.overflow_marker;
        }
    }
}
