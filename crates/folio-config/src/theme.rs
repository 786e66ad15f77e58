//! Theme token configuration.
//!
//! A static declarative document of named color and font tokens, consumed by
//! the styling layer of whatever frontend renders the site. Purely
//! descriptive key/value data: no runtime logic, no validation.

use serde::{Deserialize, Serialize};

/// Theme token document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Named color tokens.
    pub colors: ThemeColors,
    /// Named font stacks.
    pub fonts: ThemeFonts,
}

/// Named color tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    /// Main background color.
    pub bg: String,
    /// Main text color.
    pub text: String,
    /// Accent color for links.
    pub accent: String,
    /// Muted color for secondary text.
    pub muted: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#0e1013".to_owned(),
            text: "#e4e6eb".to_owned(),
            accent: "#4ea1ff".to_owned(),
            muted: "#a0a3a8".to_owned(),
        }
    }
}

/// Named font stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeFonts {
    /// Body text font stack.
    pub sans: Vec<String>,
    /// Code-like text font stack.
    pub mono: Vec<String>,
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Self {
            sans: vec!["Inter".to_owned(), "sans-serif".to_owned()],
            mono: vec!["JetBrains Mono".to_owned(), "monospace".to_owned()],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = ThemeConfig::default();

        assert_eq!(theme.colors.bg, "#0e1013");
        assert_eq!(theme.colors.text, "#e4e6eb");
        assert_eq!(theme.colors.accent, "#4ea1ff");
        assert_eq!(theme.colors.muted, "#a0a3a8");
        assert_eq!(theme.fonts.sans, vec!["Inter", "sans-serif"]);
        assert_eq!(theme.fonts.mono, vec!["JetBrains Mono", "monospace"]);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let toml = r##"
[colors]
accent = "#ff8800"
"##;
        let theme: ThemeConfig = toml::from_str(toml).unwrap();

        assert_eq!(theme.colors.accent, "#ff8800");
        assert_eq!(theme.colors.bg, "#0e1013");
        assert_eq!(theme.fonts, ThemeFonts::default());
    }

    #[test]
    fn test_serializes_to_json_tokens() {
        let theme = ThemeConfig::default();

        let json = serde_json::to_value(&theme).unwrap();

        assert_eq!(json["colors"]["bg"], "#0e1013");
        assert_eq!(json["fonts"]["mono"][0], "JetBrains Mono");
    }
}
