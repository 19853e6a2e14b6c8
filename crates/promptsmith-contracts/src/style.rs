use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageStyle {
    #[default]
    Photorealistic,
    Anime,
    Cinematic,
    Surreal,
    Watercolor,
    Moebius,
    #[serde(rename = "Hyper-realistic")]
    HyperRealistic,
    Cyberpunk,
    #[serde(rename = "Oil Painting")]
    OilPainting,
    #[serde(rename = "Pencil Sketch")]
    Sketch,
    #[serde(rename = "Pixel Art")]
    PixelArt,
    #[serde(rename = "Isometric 3D")]
    Isometric3d,
    #[serde(rename = "Low Poly")]
    LowPoly,
    Claymation,
    Origami,
    #[serde(rename = "Stained Glass")]
    StainedGlass,
    #[serde(rename = "Neon Noir")]
    NeonNoir,
    #[serde(rename = "Pop Art")]
    PopArt,
    #[serde(rename = "Ukiyo-e")]
    UkiyoE,
    Vaporwave,
    Synthwave,
    Steampunk,
    Gothic,
    #[serde(rename = "Art Nouveau")]
    ArtNouveau,
    Bauhaus,
    Graffiti,
    #[serde(rename = "Comic Book")]
    ComicBook,
    #[serde(rename = "Line Art")]
    LineArt,
    #[serde(rename = "Charcoal Drawing")]
    Charcoal,
    #[serde(rename = "Studio Ghibli")]
    StudioGhibli,
    #[serde(rename = "Disney Pixar 3D")]
    DisneyPixar,
    #[serde(rename = "No Style")]
    NoStyle,
}

impl ImageStyle {
    pub const ALL: [ImageStyle; 32] = [
        ImageStyle::Photorealistic,
        ImageStyle::Anime,
        ImageStyle::Cinematic,
        ImageStyle::Surreal,
        ImageStyle::Watercolor,
        ImageStyle::Moebius,
        ImageStyle::HyperRealistic,
        ImageStyle::Cyberpunk,
        ImageStyle::OilPainting,
        ImageStyle::Sketch,
        ImageStyle::PixelArt,
        ImageStyle::Isometric3d,
        ImageStyle::LowPoly,
        ImageStyle::Claymation,
        ImageStyle::Origami,
        ImageStyle::StainedGlass,
        ImageStyle::NeonNoir,
        ImageStyle::PopArt,
        ImageStyle::UkiyoE,
        ImageStyle::Vaporwave,
        ImageStyle::Synthwave,
        ImageStyle::Steampunk,
        ImageStyle::Gothic,
        ImageStyle::ArtNouveau,
        ImageStyle::Bauhaus,
        ImageStyle::Graffiti,
        ImageStyle::ComicBook,
        ImageStyle::LineArt,
        ImageStyle::Charcoal,
        ImageStyle::StudioGhibli,
        ImageStyle::DisneyPixar,
        ImageStyle::NoStyle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ImageStyle::Photorealistic => "Photorealistic",
            ImageStyle::Anime => "Anime",
            ImageStyle::Cinematic => "Cinematic",
            ImageStyle::Surreal => "Surreal",
            ImageStyle::Watercolor => "Watercolor",
            ImageStyle::Moebius => "Moebius",
            ImageStyle::HyperRealistic => "Hyper-realistic",
            ImageStyle::Cyberpunk => "Cyberpunk",
            ImageStyle::OilPainting => "Oil Painting",
            ImageStyle::Sketch => "Pencil Sketch",
            ImageStyle::PixelArt => "Pixel Art",
            ImageStyle::Isometric3d => "Isometric 3D",
            ImageStyle::LowPoly => "Low Poly",
            ImageStyle::Claymation => "Claymation",
            ImageStyle::Origami => "Origami",
            ImageStyle::StainedGlass => "Stained Glass",
            ImageStyle::NeonNoir => "Neon Noir",
            ImageStyle::PopArt => "Pop Art",
            ImageStyle::UkiyoE => "Ukiyo-e",
            ImageStyle::Vaporwave => "Vaporwave",
            ImageStyle::Synthwave => "Synthwave",
            ImageStyle::Steampunk => "Steampunk",
            ImageStyle::Gothic => "Gothic",
            ImageStyle::ArtNouveau => "Art Nouveau",
            ImageStyle::Bauhaus => "Bauhaus",
            ImageStyle::Graffiti => "Graffiti",
            ImageStyle::ComicBook => "Comic Book",
            ImageStyle::LineArt => "Line Art",
            ImageStyle::Charcoal => "Charcoal Drawing",
            ImageStyle::StudioGhibli => "Studio Ghibli",
            ImageStyle::DisneyPixar => "Disney Pixar 3D",
            ImageStyle::NoStyle => "No Style",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.label().eq_ignore_ascii_case(label.trim()))
    }

    pub fn is_photographic(self) -> bool {
        matches!(self, ImageStyle::Photorealistic | ImageStyle::HyperRealistic)
    }
}

impl fmt::Display for ImageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Passed through to the generation backend untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    LandscapeWide,
    #[serde(rename = "9:16")]
    PortraitWide,
    #[serde(rename = "3:4")]
    StandardPortrait,
    #[serde(rename = "4:3")]
    StandardLandscape,
}

impl AspectRatio {
    pub fn ratio(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::LandscapeWide => "16:9",
            AspectRatio::PortraitWide => "9:16",
            AspectRatio::StandardPortrait => "3:4",
            AspectRatio::StandardLandscape => "4:3",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::{AspectRatio, ImageStyle};

    #[test]
    fn style_labels_match_serde_names() -> anyhow::Result<()> {
        for style in ImageStyle::ALL {
            let encoded = serde_json::to_value(style)?;
            assert_eq!(encoded, serde_json::json!(style.label()));
            assert_eq!(ImageStyle::from_label(style.label()), Some(style));
        }
        Ok(())
    }

    #[test]
    fn photographic_styles() {
        assert!(ImageStyle::Photorealistic.is_photographic());
        assert!(ImageStyle::HyperRealistic.is_photographic());
        assert!(!ImageStyle::Anime.is_photographic());
    }

    #[test]
    fn aspect_ratio_serializes_as_ratio() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::to_value(AspectRatio::PortraitWide)?,
            serde_json::json!("9:16")
        );
        Ok(())
    }
}
