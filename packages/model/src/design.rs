//! Design token system: one per project.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Project-wide design tokens. Values are assumed pre-validated by the
/// editor; the engine copies them through verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSystem {
    /// Token name -> CSS color value.
    pub colors: BTreeMap<String, String>,

    pub typography: Typography,

    /// Token name -> CSS border-radius value.
    pub radius: BTreeMap<String, String>,

    pub spacing: Spacing,

    /// Token name -> CSS box-shadow value.
    pub shadows: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// Google font family for headings.
    pub heading_font: String,
    /// Google font family for body text.
    pub body_font: String,
    pub sizes: BTreeMap<String, String>,
    pub weights: BTreeMap<String, String>,
    pub line_heights: BTreeMap<String, String>,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            heading_font: "Inter".to_string(),
            body_font: "Inter".to_string(),
            sizes: BTreeMap::new(),
            weights: BTreeMap::new(),
            line_heights: BTreeMap::new(),
        }
    }
}

/// Spacing scale: `unit` plus an ordered list of multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub unit: String,
    pub scale: Vec<f64>,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            unit: "px".to_string(),
            scale: Vec::new(),
        }
    }
}
