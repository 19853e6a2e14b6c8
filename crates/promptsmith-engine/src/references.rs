use promptsmith_contracts::error::ValidationError;
use promptsmith_contracts::references::{ReferenceImage, ReferenceUsage};

const EXTREME: &str = "extreme, exact influence";
const STRONG: &str = "strong influence";
const MODERATE: &str = "moderate influence";
const SUBTLE: &str = "subtle, loose inspiration";

/// Bucketed wording for how strongly a reference should steer the output.
pub fn strength_descriptor(intensity: f64) -> &'static str {
    if intensity >= 0.9 {
        EXTREME
    } else if intensity >= 0.7 {
        STRONG
    } else if intensity >= 0.4 {
        MODERATE
    } else {
        SUBTLE
    }
}

/// Builds the `[REF_INSTRUCTION]` suffix for the attached references, one
/// directive per image in order. Every image yields a clause even when two
/// share a usage. Intensities outside `0.1..=1.0` are rejected.
pub fn compile_reference_instructions(
    images: &[ReferenceImage],
    high_intensity_threshold: f64,
) -> Result<String, ValidationError> {
    let mut out = String::new();
    for (index, image) in images.iter().enumerate() {
        image.validate(index)?;
        out.push_str(&reference_clause(
            index + 1,
            image,
            image.intensity >= high_intensity_threshold,
        ));
    }
    Ok(out)
}

fn reference_clause(number: usize, image: &ReferenceImage, high_intensity: bool) -> String {
    let intensity = image.intensity;
    let strength = strength_descriptor(intensity);
    let lead = format!(" [REF_INSTRUCTION]: Use Reference Image {number} (Weight: {intensity})");
    match image.usage {
        ReferenceUsage::Clothing => format!(
            "{lead} as the {strength} source for the character's clothing and attire. Ignore the face in this reference."
        ),
        ReferenceUsage::Face => {
            let mut clause =
                format!("{lead} as the {strength} source for facial features and identity.");
            if high_intensity {
                clause.push_str(
                    " Strictly override the text prompt for Skin Tone, Eye Color, and Hair Color to match this reference image exactly.",
                );
            }
            clause
        }
        ReferenceUsage::Style => format!(
            "{lead} as the {strength} source for Art Style, Color Palette, and Lighting. Do NOT copy the subject matter."
        ),
        ReferenceUsage::Background => format!(
            "{lead} as the {strength} source for the Environment and Background setting."
        ),
        ReferenceUsage::Character => {
            let mut clause = format!("{lead} as the {strength} source for the entire Character.");
            if high_intensity {
                clause.push_str(
                    " Strictly override the text prompt for Hair Color, Skin Color, Eye Color, and Body Build/Physique to match this reference image exactly.",
                );
            }
            clause
        }
        ReferenceUsage::Structure => {
            let mut clause = format!("{lead} as {strength} structural inspiration.");
            if high_intensity {
                clause.push_str(
                    " Strictly override the text prompt for Character Build, Body Type, and Physical Proportions to match this reference.",
                );
            }
            clause
        }
    }
}
