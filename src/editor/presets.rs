// SPDX-License-Identifier: MPL-2.0
//! Ready-made edit instructions offered next to the custom prompt.

/// A named edit instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Button label.
    pub label: &'static str,
    /// Instruction sent to the model.
    pub prompt: &'static str,
}

const fn preset(label: &'static str, prompt: &'static str) -> Preset {
    Preset { label, prompt }
}

/// One-click photographic corrections.
pub const QUICK_EDITS: [Preset; 10] = [
    preset(
        "Improve Lighting",
        "Improve the lighting, make it look professional, bright, and clear, enhancing the natural light.",
    ),
    preset(
        "Boost Contrast",
        "Increase the contrast for a more dramatic, punchy, and dynamic effect.",
    ),
    preset(
        "Cinematic",
        "Apply a cinematic color grade, with teal and orange tones, giving it a blockbuster movie look.",
    ),
    preset(
        "Vintage Look",
        "Give this image a vintage, faded photograph look from the 1970s, with warm tones and slight grain.",
    ),
    preset(
        "Bold B&W",
        "Convert to a high-contrast, dramatic black and white with deep blacks and bright whites.",
    ),
    preset(
        "Vivid Colors",
        "Make the colors more vibrant and saturated, like a beautiful summer day. Enhance the blues, greens, and reds.",
    ),
    preset(
        "Soft Focus",
        "Apply a soft focus effect, keeping the main subject perfectly sharp but adding a gentle, dreamy blur to the background.",
    ),
    preset(
        "Sharpen",
        "Slightly sharpen the details in the image to make them crisper and more defined, without adding artifacts.",
    ),
    preset(
        "Surreal Touch",
        "Add a subtle surreal touch to the image, like making the sky an unusual color or adding a dreamy, magical glow.",
    ),
    preset(
        "Golden Hour",
        "Give the image a warm, golden hour atmosphere, as if it were taken just before sunset.",
    ),
];

/// Full artistic restyles.
pub const ARTISTIC_STYLES: [Preset; 4] = [
    preset(
        "Van Gogh",
        "Turn this image into an oil painting in the style of Van Gogh, with thick, swirling brushstrokes and vibrant colors.",
    ),
    preset(
        "Watercolor",
        "Convert this image into a delicate watercolor painting, with soft colors, blurred edges and a paper texture.",
    ),
    preset(
        "Cyberpunk",
        "Apply a cyberpunk aesthetic to this image, adding neon lights, reflections on wet surfaces and a futuristic urban atmosphere.",
    ),
    preset(
        "Fantasy Art",
        "Render this image as a piece of epic fantasy art, with magical light, dreamy colors and a mystical atmosphere.",
    ),
];

/// Short fragments the user can append to a custom prompt.
pub const PROMPT_SUGGESTIONS: [&str; 12] = [
    "Remove background",
    "Change background to...",
    "Add a cat",
    "Painted effect",
    "Watercolor style",
    "Futuristic look",
    "Dreamy atmosphere",
    "Pastel colors",
    "Warm tones",
    "Dramatic light",
    "Miniature effect",
    "Double exposure",
];

/// Instruction sent with every style-suggestion request.
pub const STYLE_INSTRUCTION: &str = "Analyze this image and suggest a creative, artistic prompt \
to transform it radically. The prompt must describe a style, a mood and a visual transformation. \
Be concise and creative, and return only the prompt text. Examples: 'Turn this image into an oil \
painting in the style of Van Gogh, with thick brushstrokes and vibrant colors.' or 'Apply a \
cyberpunk aesthetic, with neon lights, reflections on the rain and a futuristic atmosphere.'";

/// Appends a suggestion fragment to the prompt being typed.
///
/// An empty prompt becomes the suggestion itself; otherwise the fragment is
/// lowercased and joined with a comma.
///
/// # Example
///
/// ```
/// use prompt_lens::editor::presets::append_suggestion;
///
/// assert_eq!(append_suggestion("  ", "Add a cat"), "Add a cat");
/// assert_eq!(append_suggestion("Warm tones ", "Add a cat"), "Warm tones, add a cat");
/// ```
#[must_use]
pub fn append_suggestion(current: &str, suggestion: &str) -> String {
    let current = current.trim();
    if current.is_empty() {
        suggestion.to_string()
    } else {
        format!("{current}, {}", suggestion.to_lowercase())
    }
}
