use promptsmith_contracts::request::{CompiledPrompt, RequestMode};
use promptsmith_contracts::style::ImageStyle;

/// The text a generation client sends for `compiled` in `mode`.
pub fn render_request_text(
    compiled: &CompiledPrompt,
    style: ImageStyle,
    mode: RequestMode,
    append_style_suffix: bool,
) -> String {
    let prompt = compiled.positive_prompt.as_str();
    let styled = style != ImageStyle::NoStyle;
    match mode {
        RequestMode::TextToImage => {
            let mut text = prompt.to_string();
            if styled && append_style_suffix {
                text = format!("{text}. Art style: {style}. High quality, detailed.");
            }
            let negative = compiled.negative_prompt.trim();
            if !negative.is_empty() {
                text = format!("{text}. Exclude: {negative}.");
            }
            text
        }
        RequestMode::Variation => {
            let mut text = format!("Create a variation of this image. {prompt}");
            if styled {
                text.push_str(&format!(". Style: {style}"));
            }
            text
        }
        RequestMode::Upscale => {
            let mut text =
                format!("Upscale this image to high resolution (4K). Maintain details. {prompt}");
            if styled {
                text.push_str(&format!(". Style: {style}"));
            }
            text
        }
    }
}

/// Appends a suggestion chip to a free-text prompt.
pub fn append_suggestion(prompt: &str, suggestion: &str) -> String {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return suggestion.to_string();
    }
    let separator = if trimmed.ends_with(',') || trimmed.ends_with('.') {
        " "
    } else {
        ", "
    };
    format!("{trimmed}{separator}{suggestion}")
}
