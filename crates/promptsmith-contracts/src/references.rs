use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_INTENSITY: f64 = 0.1;
pub const MAX_INTENSITY: f64 = 1.0;
pub const DEFAULT_INTENSITY: f64 = 0.8;

/// What an attached image contributes to the generated picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReferenceUsage {
    #[default]
    Structure,
    Character,
    Face,
    Clothing,
    Style,
    Background,
}

impl ReferenceUsage {
    pub fn label(self) -> &'static str {
        match self {
            ReferenceUsage::Structure => "Structure",
            ReferenceUsage::Character => "Character",
            ReferenceUsage::Face => "Face",
            ReferenceUsage::Clothing => "Clothing",
            ReferenceUsage::Style => "Style",
            ReferenceUsage::Background => "Background",
        }
    }
}

impl fmt::Display for ReferenceUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One attached reference image. The pixels stay with the caller; `source` is
/// whatever identity the caller uses for them (a path, an upload id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub source: String,
    #[serde(default)]
    pub usage: ReferenceUsage,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

impl ReferenceImage {
    pub fn new(source: impl Into<String>, usage: ReferenceUsage, intensity: f64) -> Self {
        Self {
            source: source.into(),
            usage,
            intensity,
        }
    }

    /// `index` is the 0-based position used in error reporting.
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        if !self.intensity.is_finite()
            || !(MIN_INTENSITY..=MAX_INTENSITY).contains(&self.intensity)
        {
            return Err(ValidationError::IntensityOutOfRange {
                index,
                intensity: self.intensity,
                min: MIN_INTENSITY,
                max: MAX_INTENSITY,
            });
        }
        Ok(())
    }
}

fn default_intensity() -> f64 {
    DEFAULT_INTENSITY
}
