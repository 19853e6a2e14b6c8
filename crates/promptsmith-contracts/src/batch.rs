use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::TraitCategory;

/// A trait group the batch sampler may randomize. Declaration order is the
/// order fragments and instructions are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VaryFlag {
    #[serde(rename = "varyOutfit")]
    Outfit,
    #[serde(rename = "varyLocation")]
    Location,
    #[serde(rename = "varyWeather")]
    Weather,
    #[serde(rename = "varyFraming")]
    Framing,
    #[serde(rename = "varyLens")]
    Lens,
    #[serde(rename = "varyFocus")]
    Focus,
    #[serde(rename = "varyMotion")]
    Motion,
    #[serde(rename = "varyLighting")]
    Lighting,
    #[serde(rename = "varyAge")]
    Age,
    #[serde(rename = "varyPose")]
    Pose,
    #[serde(rename = "varyEmotion")]
    Emotion,
    #[serde(rename = "varyHair")]
    Hair,
    #[serde(rename = "varySkinTexture")]
    SkinTexture,
}

impl VaryFlag {
    pub const ALL: [VaryFlag; 13] = [
        VaryFlag::Outfit,
        VaryFlag::Location,
        VaryFlag::Weather,
        VaryFlag::Framing,
        VaryFlag::Lens,
        VaryFlag::Focus,
        VaryFlag::Motion,
        VaryFlag::Lighting,
        VaryFlag::Age,
        VaryFlag::Pose,
        VaryFlag::Emotion,
        VaryFlag::Hair,
        VaryFlag::SkinTexture,
    ];

    /// Label used in generation-mode `"{Label}: {value}"` fragments.
    pub fn label(self) -> &'static str {
        match self {
            VaryFlag::Outfit => "Attire",
            VaryFlag::Location => "Location",
            VaryFlag::Weather => "Weather",
            VaryFlag::Framing => "Camera",
            VaryFlag::Lens => "Lens",
            VaryFlag::Focus => "Focus",
            VaryFlag::Motion => "Motion",
            VaryFlag::Lighting => "Lighting",
            VaryFlag::Age => "Age",
            VaryFlag::Pose => "Pose",
            VaryFlag::Emotion => "Expression",
            VaryFlag::Hair => "Hair",
            VaryFlag::SkinTexture => "Skin Texture",
        }
    }

    /// Phrase used in image-to-image `Change ...` / `Keep ...` instructions.
    pub fn attribute(self) -> &'static str {
        match self {
            VaryFlag::Outfit => "outfit and clothing",
            VaryFlag::Location => "location",
            VaryFlag::Weather => "weather",
            VaryFlag::Framing => "camera framing",
            VaryFlag::Lens => "lens",
            VaryFlag::Focus => "focus",
            VaryFlag::Motion => "motion",
            VaryFlag::Lighting => "lighting",
            VaryFlag::Age => "age",
            VaryFlag::Pose => "pose",
            VaryFlag::Emotion => "facial expression",
            VaryFlag::Hair => "hair",
            VaryFlag::SkinTexture => "skin texture",
        }
    }

    /// Categories drawn (in order) for one sample of this flag.
    pub fn categories(self) -> &'static [TraitCategory] {
        match self {
            VaryFlag::Outfit => &[TraitCategory::Clothing],
            VaryFlag::Location => &[TraitCategory::Environment],
            VaryFlag::Weather => &[TraitCategory::Weather],
            VaryFlag::Framing => &[TraitCategory::Framing],
            VaryFlag::Lens => &[TraitCategory::Lens],
            VaryFlag::Focus => &[TraitCategory::Focus],
            VaryFlag::Motion => &[TraitCategory::Motion],
            VaryFlag::Lighting => &[TraitCategory::Lighting],
            VaryFlag::Age => &[TraitCategory::Age],
            VaryFlag::Pose => &[TraitCategory::Pose],
            VaryFlag::Emotion => &[TraitCategory::Emotion],
            VaryFlag::Hair => &[TraitCategory::HairStyle, TraitCategory::HairColor],
            VaryFlag::SkinTexture => &[TraitCategory::SkinTexture],
        }
    }

    /// Outfit and location are pinned explicitly when not varied so an
    /// image-to-image batch keeps continuity.
    pub fn is_consistency_sensitive(self) -> bool {
        matches!(self, VaryFlag::Outfit | VaryFlag::Location)
    }
}

/// Which flags a batch randomizes. Missing flags read as disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSettings {
    #[serde(flatten)]
    flags: IndexMap<VaryFlag, bool>,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self::from_enabled(&[
            VaryFlag::Pose,
            VaryFlag::Framing,
            VaryFlag::Outfit,
            VaryFlag::Location,
        ])
    }
}

impl BatchSettings {
    pub fn none() -> Self {
        Self::from_enabled(&[])
    }

    pub fn all() -> Self {
        Self::from_enabled(&VaryFlag::ALL)
    }

    /// Varies pose and camera, keeps everything else fixed.
    pub fn pose_sheet() -> Self {
        Self::from_enabled(&[VaryFlag::Pose, VaryFlag::Framing])
    }

    pub fn from_enabled(enabled: &[VaryFlag]) -> Self {
        let flags = VaryFlag::ALL
            .iter()
            .map(|flag| (*flag, enabled.contains(flag)))
            .collect();
        Self { flags }
    }

    pub fn is_enabled(&self, flag: VaryFlag) -> bool {
        self.flags.get(&flag).copied().unwrap_or(false)
    }

    pub fn set(&mut self, flag: VaryFlag, enabled: bool) {
        self.flags.insert(flag, enabled);
    }

    pub fn with(mut self, flag: VaryFlag, enabled: bool) -> Self {
        self.set(flag, enabled);
        self
    }

    pub fn toggle(&mut self, flag: VaryFlag) {
        let current = self.is_enabled(flag);
        self.set(flag, !current);
    }

    /// Enabled flags in rendering order.
    pub fn enabled(&self) -> Vec<VaryFlag> {
        VaryFlag::ALL
            .iter()
            .copied()
            .filter(|flag| self.is_enabled(*flag))
            .collect()
    }

    pub fn any_enabled(&self) -> bool {
        VaryFlag::ALL.iter().any(|flag| self.is_enabled(*flag))
    }
}

#[cfg(test)]
mod tests {
    use super::{BatchSettings, VaryFlag};

    #[test]
    fn default_settings_vary_pose_framing_outfit_location() {
        let settings = BatchSettings::default();
        assert_eq!(
            settings.enabled(),
            vec![
                VaryFlag::Outfit,
                VaryFlag::Location,
                VaryFlag::Framing,
                VaryFlag::Pose
            ]
        );
    }

    #[test]
    fn pose_sheet_preset_only_varies_pose_and_framing() {
        let settings = BatchSettings::pose_sheet();
        assert!(settings.is_enabled(VaryFlag::Pose));
        assert!(settings.is_enabled(VaryFlag::Framing));
        assert!(!settings.is_enabled(VaryFlag::Outfit));
        assert!(!settings.is_enabled(VaryFlag::Location));
        assert_eq!(settings.enabled().len(), 2);
    }

    #[test]
    fn settings_parse_from_vary_keys() -> anyhow::Result<()> {
        let settings: BatchSettings =
            serde_json::from_str(r#"{"varyOutfit": false, "varyLocation": true}"#)?;
        assert!(!settings.is_enabled(VaryFlag::Outfit));
        assert!(settings.is_enabled(VaryFlag::Location));
        assert!(!settings.is_enabled(VaryFlag::Hair));
        Ok(())
    }

    #[test]
    fn toggle_flips_a_flag() {
        let mut settings = BatchSettings::none();
        assert!(!settings.any_enabled());
        settings.toggle(VaryFlag::Weather);
        assert_eq!(settings.enabled(), vec![VaryFlag::Weather]);
    }
}
