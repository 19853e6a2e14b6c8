use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{TraitCatalog, TraitCategory};
use crate::error::CatalogError;

pub const BALD: &str = "Bald";
pub const CLEAN_SHAVEN: &str = "Clean Shaven";
pub const MATCH_HAIR: &str = "Match Hair";
pub const MATCH_OUTFIT: &str = "Match Outfit";
pub const NO_TATTOOS: &str = "No Tattoos";

const DEFAULT_SELECTIONS: &[(TraitCategory, &str)] = &[
    (TraitCategory::Gender, "Female"),
    (TraitCategory::Age, "26-35"),
    (TraitCategory::Body, "Athletic"),
    (TraitCategory::SkinTone, "Fair"),
    (TraitCategory::SkinTexture, "Photorealistic Skin"),
    (TraitCategory::Tattoos, NO_TATTOOS),
    (TraitCategory::EyeColor, "Blue"),
    (TraitCategory::HairStyle, "Long Layers"),
    (TraitCategory::HairColor, "Blonde"),
    (TraitCategory::FacialHair, CLEAN_SHAVEN),
    (TraitCategory::FacialHairColor, MATCH_HAIR),
    (TraitCategory::FacialFeature, "Natural Look"),
    (TraitCategory::Emotion, "Neutral"),
    (TraitCategory::Footwear, MATCH_OUTFIT),
    (TraitCategory::Lighting, "Natural Sunlight"),
    (TraitCategory::Weather, "Sunny"),
    (TraitCategory::Pose, "Standing"),
    (TraitCategory::Framing, "Full Body"),
    (TraitCategory::Lens, "50mm Prime"),
    (TraitCategory::Focus, "f/5.6 Sharp"),
    (TraitCategory::Motion, "Static / Tripod"),
    (TraitCategory::ImageQuality, "Extreme Realism"),
];

/// The current selection for every trait category.
///
/// Owned by the presentation layer and handed to the compiler by reference;
/// no history is kept. An unset category reads as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuilderState {
    #[serde(flatten)]
    selections: IndexMap<TraitCategory, String>,
    #[serde(default, rename = "customPose", skip_serializing_if = "Option::is_none")]
    custom_pose: Option<String>,
}

impl BuilderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fully populated state; role, clothing and environment come from the
    /// first options of `world`.
    pub fn defaults(catalog: &TraitCatalog, world: &str) -> Result<Self, CatalogError> {
        let mut state = Self::new();
        for (category, value) in DEFAULT_SELECTIONS {
            state.set(*category, *value);
        }
        state.reset_world(catalog, world)?;
        Ok(state)
    }

    pub fn get(&self, category: TraitCategory) -> &str {
        self.selections
            .get(&category)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set(&mut self, category: TraitCategory, value: impl Into<String>) {
        self.selections.insert(category, value.into());
    }

    pub fn with(mut self, category: TraitCategory, value: impl Into<String>) -> Self {
        self.set(category, value);
        self
    }

    pub fn custom_pose(&self) -> Option<&str> {
        self.custom_pose
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn set_custom_pose(&mut self, value: Option<String>) {
        self.custom_pose = value;
    }

    pub fn with_custom_pose(mut self, value: impl Into<String>) -> Self {
        self.custom_pose = Some(value.into());
        self
    }

    /// Re-points the world-scoped categories at the first options of `world`.
    pub fn reset_world(&mut self, catalog: &TraitCatalog, world: &str) -> Result<(), CatalogError> {
        for category in [
            TraitCategory::Role,
            TraitCategory::Clothing,
            TraitCategory::Environment,
        ] {
            let first = catalog.first_option(category, world)?.to_string();
            self.set(category, first);
        }
        Ok(())
    }

    /// Categories with no selection or a blank one.
    pub fn missing(&self) -> Vec<TraitCategory> {
        TraitCategory::ALL
            .iter()
            .copied()
            .filter(|category| self.get(*category).trim().is_empty())
            .collect()
    }
}
