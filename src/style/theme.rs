//! Theme tokens consumed by the style resolvers.
//!
//! Tokens are opaque strings. The resolvers only pick which token to use;
//! they never parse, compute, or validate a value.

use crate::config::{self, ConfigError};
use serde::{Deserialize, Serialize};

/// Named design values read by the resolvers.
///
/// Field names follow the theme's camelCase token names when serialized, so
/// a theme exported from a design system can be loaded as-is. Missing
/// fields fall back to the built-in light theme.
///
/// # Example
///
/// ```rust
/// use controlstate::style::ThemeTokens;
///
/// let theme = ThemeTokens::from_json(r##"{ "colors": { "primary400": "#0050FF" } }"##).unwrap();
///
/// assert_eq!(theme.colors.primary400, "#0050FF");
/// assert_eq!(theme.colors.negative400, ThemeTokens::default().colors.negative400);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTokens {
    pub colors: ColorTokens,
    pub sizing: SizingTokens,
}

impl ThemeTokens {
    /// Parse a (possibly partial) theme from JSON.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        config::from_json("theme tokens", input)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorTokens {
    pub primary: String,
    pub primary400: String,
    pub primary500: String,
    pub primary600: String,

    pub negative50: String,
    pub negative100: String,
    pub negative200: String,
    pub negative400: String,
    pub negative500: String,
    pub negative600: String,

    pub mono400: String,
    pub mono500: String,
    pub mono600: String,
    pub mono700: String,

    pub foreground: String,
    pub foreground_alt: String,

    pub tick_fill: String,
    pub tick_fill_hover: String,
    pub tick_fill_active: String,
    pub tick_fill_disabled: String,
    pub tick_border: String,
    pub tick_mark_fill: String,

    pub slider_track_fill: String,
    pub slider_track_fill_hover: String,
    pub slider_track_fill_active: String,
    pub slider_track_fill_disabled: String,
}

impl Default for ColorTokens {
    fn default() -> Self {
        let white = "#FFFFFF";
        Self {
            primary: "#276EF1".into(),
            primary400: "#276EF1".into(),
            primary500: "#1E54B7".into(),
            primary600: "#174291".into(),

            negative50: "#FFEFED".into(),
            negative100: "#FED7D2".into(),
            negative200: "#F1998E".into(),
            negative400: "#E11900".into(),
            negative500: "#AB1300".into(),
            negative600: "#870F00".into(),

            mono400: "#E5E5E5".into(),
            mono500: "#CCCCCC".into(),
            mono600: "#B3B3B3".into(),
            mono700: "#999999".into(),

            foreground: "#000000".into(),
            foreground_alt: "#666666".into(),

            tick_fill: white.into(),
            tick_fill_hover: "#F7F7F7".into(),
            tick_fill_active: "#F0F0F0".into(),
            tick_fill_disabled: "#B3B3B3".into(),
            tick_border: "#999999".into(),
            tick_mark_fill: white.into(),

            slider_track_fill: "#E5E5E5".into(),
            slider_track_fill_hover: "#CCCCCC".into(),
            slider_track_fill_active: "#B3B3B3".into(),
            slider_track_fill_disabled: "#F0F0F0".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingTokens {
    pub scale0: String,
    pub scale100: String,
    pub scale300: String,
    pub scale600: String,
    pub scale700: String,
}

impl Default for SizingTokens {
    fn default() -> Self {
        Self {
            scale0: "2px".into(),
            scale100: "4px".into(),
            scale300: "8px".into(),
            scale600: "16px".into(),
            scale700: "20px".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_token_names_are_accepted() {
        let theme = ThemeTokens::from_json(
            r#"{ "colors": { "tickFillDisabled": "gray", "foregroundAlt": "silver" },
                 "sizing": { "scale300": "10px" } }"#,
        )
        .unwrap();

        assert_eq!(theme.colors.tick_fill_disabled, "gray");
        assert_eq!(theme.colors.foreground_alt, "silver");
        assert_eq!(theme.sizing.scale300, "10px");
        assert_eq!(theme.sizing.scale0, SizingTokens::default().scale0);
    }

    #[test]
    fn empty_object_is_default_theme() {
        let theme = ThemeTokens::from_json("{}").unwrap();
        assert_eq!(theme, ThemeTokens::default());
    }

    #[test]
    fn malformed_theme_is_a_config_error() {
        let result = ThemeTokens::from_json(r#"{ "colors": 7 }"#);
        assert!(matches!(result, Err(ConfigError::Parse { what: "theme tokens", .. })));
    }

    #[test]
    fn theme_roundtrips_through_json() {
        let theme = ThemeTokens::default();
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.contains("sliderTrackFillDisabled"));
        assert_eq!(ThemeTokens::from_json(&json).unwrap(), theme);
    }
}
