//! Style Registry
//!
//! Static catalog of the selectable ANSI styles: foreground colors,
//! background colors, and text styles. Each entry pairs an SGR parameter
//! code with a display name and a hint for how a UI should render its
//! swatch or button. The tables are const data and safe to share freely.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three independent families of style attributes.
///
/// Attributes of different kinds coexist on the same text; attributes of
/// the same kind are mutually exclusive on a given run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    /// Text color (SGR 31-37)
    Foreground,
    /// Background color (SGR 40-45)
    Background,
    /// Font effect such as bold or underline (SGR 1, 4)
    TextStyle,
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleKind::Foreground => write!(f, "foreground"),
            StyleKind::Background => write!(f, "background"),
            StyleKind::TextStyle => write!(f, "text style"),
        }
    }
}

/// A single style command: one SGR parameter of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleAttribute {
    /// Which attribute family this belongs to
    pub kind: StyleKind,
    /// The SGR parameter emitted for this attribute
    pub code: u8,
}

impl StyleAttribute {
    /// Create a foreground color attribute
    pub fn foreground(code: u8) -> Self {
        Self {
            kind: StyleKind::Foreground,
            code,
        }
    }

    /// Create a background color attribute
    pub fn background(code: u8) -> Self {
        Self {
            kind: StyleKind::Background,
            code,
        }
    }

    /// Create a text style attribute
    pub fn text_style(code: u8) -> Self {
        Self {
            kind: StyleKind::TextStyle,
            code,
        }
    }
}

/// Font effects available through [`StyleKind::TextStyle`] entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontEffect {
    Bold,
    Underline,
}

/// How a UI should present a registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderHint {
    /// Color swatch, as a hex string
    Swatch(&'static str),
    /// Font effect applied to the button label
    Effect(FontEffect),
}

/// One selectable style in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleEntry {
    /// SGR parameter code
    pub code: u8,
    /// Human-readable name shown in the UI
    pub name: &'static str,
    /// Rendering hint for the UI
    pub hint: RenderHint,
}

/// Selectable foreground colors (Solarized-flavored chat palette)
pub const FOREGROUND: &[StyleEntry] = &[
    StyleEntry { code: 31, name: "Red", hint: RenderHint::Swatch("#dc322f") },
    StyleEntry { code: 32, name: "Green", hint: RenderHint::Swatch("#859900") },
    StyleEntry { code: 33, name: "Gold", hint: RenderHint::Swatch("#b58900") },
    StyleEntry { code: 34, name: "Blue", hint: RenderHint::Swatch("#268bd2") },
    StyleEntry { code: 35, name: "Pink", hint: RenderHint::Swatch("#d33682") },
    StyleEntry { code: 36, name: "Teal", hint: RenderHint::Swatch("#2aa198") },
    StyleEntry { code: 37, name: "White", hint: RenderHint::Swatch("#ffffff") },
];

/// Selectable background colors
pub const BACKGROUND: &[StyleEntry] = &[
    StyleEntry { code: 40, name: "Dark", hint: RenderHint::Swatch("#002b36") },
    StyleEntry { code: 41, name: "Red", hint: RenderHint::Swatch("#cb4b16") },
    StyleEntry { code: 42, name: "Gray", hint: RenderHint::Swatch("#586e75") },
    StyleEntry { code: 43, name: "Light Gray", hint: RenderHint::Swatch("#657b83") },
    StyleEntry { code: 44, name: "Blue Gray", hint: RenderHint::Swatch("#839496") },
    StyleEntry { code: 45, name: "Blurple", hint: RenderHint::Swatch("#6c71c4") },
];

/// Selectable text styles
pub const TEXT_STYLES: &[StyleEntry] = &[
    StyleEntry { code: 1, name: "Bold", hint: RenderHint::Effect(FontEffect::Bold) },
    StyleEntry { code: 4, name: "Underline", hint: RenderHint::Effect(FontEffect::Underline) },
];

/// Registry lookup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("Unknown {kind} style code {code}")]
    UnknownStyle { kind: StyleKind, code: u8 },
}

/// Table for a given attribute kind
pub fn entries(kind: StyleKind) -> &'static [StyleEntry] {
    match kind {
        StyleKind::Foreground => FOREGROUND,
        StyleKind::Background => BACKGROUND,
        StyleKind::TextStyle => TEXT_STYLES,
    }
}

/// Look up the registry entry for a style code.
///
/// Returns [`StyleError::UnknownStyle`] when the code is not part of the
/// selectable palette for that kind.
pub fn lookup(kind: StyleKind, code: u8) -> Result<&'static StyleEntry, StyleError> {
    entries(kind)
        .iter()
        .find(|entry| entry.code == code)
        .ok_or(StyleError::UnknownStyle { kind, code })
}
