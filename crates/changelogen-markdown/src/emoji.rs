//! Emoji shortcode normalization
//!
//! Commit type titles are often written with shortcodes (`:sparkles: Features`).
//! The rendered document goes through a [`ShortcodeNormalizer`] as its last
//! step so those become glyphs.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches `:shortcode:` tokens
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z0-9_+-]+):").expect("Invalid regex"));

/// Gitmoji shortcodes and their glyphs
const GITMOJIS: &[(&str, &str)] = &[
    ("art", "🎨"),
    ("zap", "⚡️"),
    ("fire", "🔥"),
    ("bug", "🐛"),
    ("ambulance", "🚑️"),
    ("sparkles", "✨"),
    ("memo", "📝"),
    ("rocket", "🚀"),
    ("lipstick", "💄"),
    ("tada", "🎉"),
    ("white_check_mark", "✅"),
    ("lock", "🔒️"),
    ("closed_lock_with_key", "🔐"),
    ("bookmark", "🔖"),
    ("rotating_light", "🚨"),
    ("construction", "🚧"),
    ("green_heart", "💚"),
    ("arrow_down", "⬇️"),
    ("arrow_up", "⬆️"),
    ("pushpin", "📌"),
    ("construction_worker", "👷"),
    ("chart_with_upwards_trend", "📈"),
    ("recycle", "♻️"),
    ("heavy_plus_sign", "➕"),
    ("heavy_minus_sign", "➖"),
    ("wrench", "🔧"),
    ("hammer", "🔨"),
    ("globe_with_meridians", "🌐"),
    ("pencil2", "✏️"),
    ("poop", "💩"),
    ("rewind", "⏪️"),
    ("twisted_rightwards_arrows", "🔀"),
    ("package", "📦️"),
    ("alien", "👽️"),
    ("truck", "🚚"),
    ("page_facing_up", "📄"),
    ("boom", "💥"),
    ("bento", "🍱"),
    ("wheelchair", "♿️"),
    ("bulb", "💡"),
    ("beers", "🍻"),
    ("speech_balloon", "💬"),
    ("card_file_box", "🗃️"),
    ("loud_sound", "🔊"),
    ("mute", "🔇"),
    ("busts_in_silhouette", "👥"),
    ("children_crossing", "🚸"),
    ("building_construction", "🏗️"),
    ("iphone", "📱"),
    ("clown_face", "🤡"),
    ("egg", "🥚"),
    ("see_no_evil", "🙈"),
    ("camera_flash", "📸"),
    ("alembic", "⚗️"),
    ("mag", "🔍️"),
    ("label", "🏷️"),
    ("seedling", "🌱"),
    ("triangular_flag_on_post", "🚩"),
    ("goal_net", "🥅"),
    ("dizzy", "💫"),
    ("wastebasket", "🗑️"),
    ("passport_control", "🛂"),
    ("adhesive_bandage", "🩹"),
    ("monocle_face", "🧐"),
    ("coffin", "⚰️"),
    ("test_tube", "🧪"),
    ("necktie", "👔"),
    ("stethoscope", "🩺"),
    ("bricks", "🧱"),
    ("technologist", "🧑‍💻"),
    ("money_with_wings", "💸"),
    ("thread", "🧵"),
    ("safety_vest", "🦺"),
    ("airplane", "✈️"),
    ("warning", "\u{26a0}\u{fe0f}"),
    ("heart", "\u{2764}\u{fe0f}"),
];

/// Converts emoji shortcodes in text to display glyphs
pub trait ShortcodeNormalizer: Send + Sync {
    /// Replace shortcodes in `text`.
    ///
    /// In strict mode a shortcode must match a known code exactly, including
    /// case; otherwise matching ignores ASCII case. Unknown shortcodes are
    /// always left as written.
    fn normalize(&self, text: &str, strict: bool) -> String;
}

/// Normalizer backed by the gitmoji shortcode table
#[derive(Debug, Clone, Copy, Default)]
pub struct GitmojiNormalizer;

impl GitmojiNormalizer {
    /// Create a new gitmoji normalizer
    pub fn new() -> Self {
        Self
    }

    /// Look up the glyph for a shortcode (without colons)
    pub fn glyph(&self, code: &str, strict: bool) -> Option<&'static str> {
        GITMOJIS
            .iter()
            .find(|(known, _)| {
                if strict {
                    *known == code
                } else {
                    known.eq_ignore_ascii_case(code)
                }
            })
            .map(|(_, glyph)| *glyph)
    }
}

impl ShortcodeNormalizer for GitmojiNormalizer {
    fn normalize(&self, text: &str, strict: bool) -> String {
        SHORTCODE_REGEX
            .replace_all(text, |caps: &Captures<'_>| match self.glyph(&caps[1], strict) {
                Some(glyph) => glyph.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

/// Normalizer that leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughNormalizer;

impl ShortcodeNormalizer for PassthroughNormalizer {
    fn normalize(&self, text: &str, _strict: bool) -> String {
        text.to_string()
    }
}
