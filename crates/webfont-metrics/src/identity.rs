//! Font Identity
//!
//! The (family, weight, style, options) tuple that uniquely determines a
//! cached metrics instance.

use std::fmt;

use crate::options::MetricsOptions;

/// Font weight (100-900)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: FontWeight = FontWeight(100);
    pub const EXTRA_LIGHT: FontWeight = FontWeight(200);
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
    pub const EXTRA_BOLD: FontWeight = FontWeight(800);
    pub const BLACK: FontWeight = FontWeight(900);
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::NORMAL
    }
}

impl From<u16> for FontWeight {
    fn from(value: u16) -> Self {
        FontWeight(value.clamp(100, 900))
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a cached metrics instance.
///
/// Two identities with the same family, weight, style, and structurally
/// equal options map to the same cache entry. Immutable once handed to the
/// cache.
#[derive(Debug, Clone)]
pub struct FontIdentity {
    pub family: String,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub options: MetricsOptions,
}

impl FontIdentity {
    /// Identity for a family at weight 400, normal style, default options.
    pub fn new(family: &str) -> Self {
        Self {
            family: family.to_string(),
            weight: FontWeight::default(),
            style: FontStyle::default(),
            options: MetricsOptions::default(),
        }
    }

    pub fn with_weight(mut self, weight: impl Into<FontWeight>) -> Self {
        self.weight = weight.into();
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_options(mut self, options: MetricsOptions) -> Self {
        self.options = options;
        self
    }

    /// Cache key: family, weight, style, and a canonical serialization of
    /// the options. Structurally equal options always produce the same key.
    pub fn cache_key(&self) -> String {
        // Plain value type with fixed field order; serialization cannot fail.
        let options = serde_json::to_string(&self.options).unwrap_or_default();
        format!("{}_{}_{}_{}", self.family, self.weight, self.style, options)
    }
}
