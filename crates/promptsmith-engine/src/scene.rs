//! Trait-to-text compilation.
//!
//! Turns a [`BuilderState`] plus secondary subjects and weighted terms into a
//! single scene description. Unset categories render as empty segments; the
//! compiler never fails on missing selections, only on invalid weights.

use promptsmith_contracts::builder::{
    BuilderState, BALD, CLEAN_SHAVEN, MATCH_HAIR, MATCH_OUTFIT, NO_TATTOOS,
};
use promptsmith_contracts::catalog::TraitCategory;
use promptsmith_contracts::error::ValidationError;
use promptsmith_contracts::style::ImageStyle;
use promptsmith_contracts::subjects::SecondarySubject;
use promptsmith_contracts::weights::{Polarity, WeightedTerm};
use serde::Serialize;

const PHOTOREALISTIC_PREFIX: &str = "Photorealistic image";
const DETAILED_PREFIX: &str = "Detailed image";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneText {
    /// Scene description with the positive weight suffix already appended.
    pub text: String,
    pub positive_weight_suffix: String,
    pub negative_weight_tokens: Vec<String>,
}

pub fn compile_scene(
    state: &BuilderState,
    subjects: &[SecondarySubject],
    terms: &[WeightedTerm],
    style: ImageStyle,
) -> Result<SceneText, ValidationError> {
    let get = |category| state.get(category);
    let lower = |category| state.get(category).to_lowercase();

    let prefix = realism_prefix(get(TraitCategory::ImageQuality), style);
    let mut text = format!(
        "{} shot using {} lens, {}, {}. {prefix} of a {} {} {} {}, {} skin, {}, {} eyes, with {}{}, {} expression{}, {}{}, {}, wearing {}{}, in a {}. Weather: {}. Lighting: {}. Quality: {}.",
        get(TraitCategory::Framing),
        get(TraitCategory::Lens),
        get(TraitCategory::Motion),
        get(TraitCategory::Focus),
        lower(TraitCategory::Body),
        get(TraitCategory::Age),
        lower(TraitCategory::Gender),
        get(TraitCategory::Role),
        lower(TraitCategory::SkinTone),
        lower(TraitCategory::SkinTexture),
        lower(TraitCategory::EyeColor),
        lower(TraitCategory::FacialFeature),
        tattoo_clause(state),
        lower(TraitCategory::Emotion),
        facial_hair_clause(state),
        pose_clause(state),
        subjects_clause(subjects),
        hair_clause(state),
        lower(TraitCategory::Clothing),
        footwear_clause(state),
        lower(TraitCategory::Environment),
        lower(TraitCategory::Weather),
        get(TraitCategory::Lighting),
        get(TraitCategory::ImageQuality),
    );

    let positive_weight_suffix = render_tokens(terms, Polarity::Positive)?.join(" ");
    if !positive_weight_suffix.is_empty() {
        text.push(' ');
        text.push_str(&positive_weight_suffix);
    }
    let negative_weight_tokens = render_tokens(terms, Polarity::Negative)?;

    Ok(SceneText {
        text,
        positive_weight_suffix,
        negative_weight_tokens,
    })
}

pub fn realism_prefix(image_quality: &str, style: ImageStyle) -> &'static str {
    if image_quality.contains("Realism") || image_quality.contains("Photo") || style.is_photographic()
    {
        PHOTOREALISTIC_PREFIX
    } else {
        DETAILED_PREFIX
    }
}

/// `"with {style} {color} hair"`, or just `"bald"`.
pub fn hair_clause(state: &BuilderState) -> String {
    let style = state.get(TraitCategory::HairStyle);
    if style == BALD {
        return "bald".to_string();
    }
    format!(
        "with {} {} hair",
        style.to_lowercase(),
        state.get(TraitCategory::HairColor).to_lowercase()
    )
}

fn tattoo_clause(state: &BuilderState) -> String {
    let tattoos = state.get(TraitCategory::Tattoos);
    if tattoos == NO_TATTOOS || tattoos.is_empty() {
        return String::new();
    }
    format!(", with {}", tattoos.to_lowercase())
}

fn facial_hair_clause(state: &BuilderState) -> String {
    let facial_hair = state.get(TraitCategory::FacialHair);
    if facial_hair == CLEAN_SHAVEN || facial_hair.is_empty() {
        return String::new();
    }
    let color = match state.get(TraitCategory::FacialHairColor) {
        MATCH_HAIR => state.get(TraitCategory::HairColor),
        other => other,
    };
    format!(
        ", sporting a {} {}",
        color.to_lowercase(),
        facial_hair.to_lowercase()
    )
}

fn pose_clause(state: &BuilderState) -> String {
    let pose = state.get(TraitCategory::Pose).to_lowercase();
    match state.custom_pose() {
        Some(custom) => format!("{pose} ({custom})"),
        None => pose,
    }
}

fn subjects_clause(subjects: &[SecondarySubject]) -> String {
    if subjects.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = subjects.iter().map(SecondarySubject::phrase).collect();
    format!(", {}", parts.join(", "))
}

fn footwear_clause(state: &BuilderState) -> String {
    let footwear = state.get(TraitCategory::Footwear);
    if footwear == MATCH_OUTFIT || footwear.is_empty() {
        return String::new();
    }
    format!(", wearing {}", footwear.to_lowercase())
}

fn render_tokens(terms: &[WeightedTerm], polarity: Polarity) -> Result<Vec<String>, ValidationError> {
    terms
        .iter()
        .filter(|term| term.polarity == polarity)
        .map(WeightedTerm::token)
        .collect()
}

#[cfg(test)]
mod tests {
    use promptsmith_contracts::builder::BuilderState;
    use promptsmith_contracts::catalog::{TraitCatalog, TraitCategory};
    use promptsmith_contracts::error::ValidationError;
    use promptsmith_contracts::style::ImageStyle;
    use promptsmith_contracts::subjects::{SecondarySubject, SubjectKind};
    use promptsmith_contracts::weights::{Scope, WeightedTerm};

    use super::{compile_scene, hair_clause, realism_prefix};

    fn base_state() -> anyhow::Result<BuilderState> {
        Ok(BuilderState::defaults(&TraitCatalog::builtin(), "Modern Day")?)
    }

    #[test]
    fn bald_collapses_hair_clause() -> anyhow::Result<()> {
        for color in ["Blonde", "Jet Black", ""] {
            let state = base_state()?
                .with(TraitCategory::HairStyle, "Bald")
                .with(TraitCategory::HairColor, color);
            assert_eq!(hair_clause(&state), "bald");
            let scene = compile_scene(&state, &[], &[], ImageStyle::Photorealistic)?;
            assert!(scene.text.contains(", bald, wearing "));
            assert!(!scene.text.contains(" hair,"));
        }
        Ok(())
    }

    #[test]
    fn facial_hair_uses_hair_color_when_matching() -> anyhow::Result<()> {
        let state = base_state()?
            .with(TraitCategory::FacialHair, "Full Beard")
            .with(TraitCategory::HairColor, "Auburn");
        let scene = compile_scene(&state, &[], &[], ImageStyle::Photorealistic)?;
        assert!(scene.text.contains(" expression, sporting a auburn full beard, "));

        let state = state.with(TraitCategory::FacialHairColor, "Grey");
        let scene = compile_scene(&state, &[], &[], ImageStyle::Photorealistic)?;
        assert!(scene.text.contains("sporting a grey full beard"));

        let clean = base_state()?;
        let scene = compile_scene(&clean, &[], &[], ImageStyle::Photorealistic)?;
        assert!(!scene.text.contains("sporting"));
        Ok(())
    }

    #[test]
    fn optional_clauses_follow_their_sentinels() -> anyhow::Result<()> {
        let state = base_state()?
            .with(TraitCategory::Tattoos, "Sleeve Tattoo")
            .with(TraitCategory::Footwear, "Combat Boots");
        let scene = compile_scene(&state, &[], &[], ImageStyle::Photorealistic)?;
        assert!(scene.text.contains(", with sleeve tattoo, "));
        assert!(scene.text.contains(", wearing combat boots, in a "));
        Ok(())
    }

    #[test]
    fn custom_pose_and_subjects_render_in_order() -> anyhow::Result<()> {
        let state = base_state()?.with_custom_pose("one hand raised");
        let subjects = vec![
            SecondarySubject::new(SubjectKind::Weapon, "Sword", "Holding"),
            SecondarySubject::new(SubjectKind::Creature, "Dragon", "Riding"),
        ];
        let scene = compile_scene(&state, &subjects, &[], ImageStyle::Photorealistic)?;
        assert!(scene
            .text
            .contains("standing (one hand raised), holding a sword, riding a dragon, with "));
        Ok(())
    }

    #[test]
    fn weighted_terms_split_by_polarity() -> anyhow::Result<()> {
        let state = base_state()?;
        let terms = vec![
            WeightedTerm::positive("fog", 1.2, Scope::Subject),
            WeightedTerm::negative("blur", 1.5, Scope::Global),
            WeightedTerm::positive("rim light", 0.8, Scope::Global),
        ];
        let scene = compile_scene(&state, &[], &terms, ImageStyle::Photorealistic)?;
        assert_eq!(scene.positive_weight_suffix, "Subject:<fog:1.2> <rim light:0.8>");
        assert!(scene.text.ends_with(". Subject:<fog:1.2> <rim light:0.8>"));
        assert_eq!(scene.negative_weight_tokens, vec!["<blur:1.5>".to_string()]);
        assert!(!scene.text.contains("blur"));
        Ok(())
    }

    #[test]
    fn invalid_weight_is_rejected() -> anyhow::Result<()> {
        let state = base_state()?;
        let terms = vec![WeightedTerm::negative("blur", 2.4, Scope::Global)];
        assert!(matches!(
            compile_scene(&state, &[], &terms, ImageStyle::Photorealistic),
            Err(ValidationError::WeightOutOfRange { .. })
        ));
        Ok(())
    }

    #[test]
    fn realism_prefix_follows_quality_and_style() {
        assert_eq!(realism_prefix("Extreme Realism", ImageStyle::Anime), "Photorealistic image");
        assert_eq!(realism_prefix("Photo Studio", ImageStyle::Anime), "Photorealistic image");
        assert_eq!(realism_prefix("8K", ImageStyle::HyperRealistic), "Photorealistic image");
        assert_eq!(realism_prefix("8K", ImageStyle::Anime), "Detailed image");
    }

    #[test]
    fn missing_values_degrade_to_empty_segments() -> anyhow::Result<()> {
        let scene = compile_scene(&BuilderState::new(), &[], &[], ImageStyle::NoStyle)?;
        assert!(scene.text.starts_with(" shot using  lens, , ."));
        assert!(scene.text.ends_with("Quality: ."));
        Ok(())
    }
}
