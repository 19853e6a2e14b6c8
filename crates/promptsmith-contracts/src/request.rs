use serde::{Deserialize, Serialize};

use crate::builder::BuilderState;
use crate::references::ReferenceImage;
use crate::style::{AspectRatio, ImageStyle};
use crate::subjects::SecondarySubject;
use crate::weights::WeightedTerm;

/// Everything the composer needs for one generation request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    /// Falls back to the configured default world when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world: Option<String>,
    #[serde(default)]
    pub builder: BuilderState,
    #[serde(default)]
    pub subjects: Vec<SecondarySubject>,
    #[serde(default)]
    pub weighted_terms: Vec<WeightedTerm>,
    #[serde(default)]
    pub references: Vec<ReferenceImage>,
    #[serde(default)]
    pub style: ImageStyle,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    /// Free-text negative prompt the weighted exclusions merge into.
    #[serde(default)]
    pub negative_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledPrompt {
    pub positive_prompt: String,
    pub negative_prompt: String,
}

/// How the generation backend is asked to produce the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestMode {
    #[default]
    TextToImage,
    Variation,
    Upscale,
}

impl RequestMode {
    pub fn label(self) -> &'static str {
        match self {
            RequestMode::TextToImage => "text_to_image",
            RequestMode::Variation => "variation",
            RequestMode::Upscale => "upscale",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ComposeRequest;
    use crate::catalog::TraitCategory;
    use crate::references::ReferenceUsage;
    use crate::style::{AspectRatio, ImageStyle};

    #[test]
    fn request_file_parses_with_defaults() -> anyhow::Result<()> {
        let request: ComposeRequest = serde_json::from_str(
            r#"{
                "builder": {"gender": "Male", "pose": "Standing"},
                "weightedTerms": [{"term": "fog", "weight": 1.2, "scope": "Subject"}],
                "references": [{"source": "face.png", "usage": "Face", "intensity": 0.9}],
                "style": "Cinematic",
                "aspectRatio": "16:9"
            }"#,
        )?;
        assert_eq!(request.world, None);
        assert_eq!(request.builder.get(TraitCategory::Gender), "Male");
        assert_eq!(request.weighted_terms[0].token()?, "Subject:<fog:1.2>");
        assert_eq!(request.references[0].usage, ReferenceUsage::Face);
        assert_eq!(request.style, ImageStyle::Cinematic);
        assert_eq!(request.aspect_ratio, AspectRatio::LandscapeWide);
        assert!(request.negative_prompt.is_empty());
        Ok(())
    }
}
