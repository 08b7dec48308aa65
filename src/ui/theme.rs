use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_normal: ColorSpec,
    pub footer_search: ColorSpec,
    pub footer_edit: ColorSpec,
    pub footer_confirm: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    /// Dark palette.
    ///
    pub fn midnight() -> Self {
        Theme {
            name: "midnight".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),
            accent: ColorSpec::rgb(187, 154, 247),
            banner: ColorSpec::rgb(125, 207, 255),
            text: ColorSpec::rgb(192, 202, 245),
            text_muted: ColorSpec::rgb(86, 95, 137),
            success: ColorSpec::rgb(158, 206, 106),
            warning: ColorSpec::rgb(224, 175, 104),
            error: ColorSpec::rgb(247, 118, 142),
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(59, 66, 97),
            highlight_bg: ColorSpec::rgb(41, 46, 66),
            highlight_fg: ColorSpec::rgb(192, 202, 245),
            footer_normal: ColorSpec::rgb(122, 162, 247),
            footer_search: ColorSpec::rgb(224, 175, 104),
            footer_edit: ColorSpec::rgb(158, 206, 106),
            footer_confirm: ColorSpec::rgb(247, 118, 142),
        }
    }

    /// Light palette.
    ///
    pub fn daylight() -> Self {
        Theme {
            name: "daylight".to_string(),
            primary: ColorSpec::rgb(46, 126, 233),
            accent: ColorSpec::rgb(152, 84, 241),
            banner: ColorSpec::rgb(0, 113, 151),
            text: ColorSpec::rgb(55, 96, 191),
            text_muted: ColorSpec::rgb(132, 140, 181),
            success: ColorSpec::rgb(88, 117, 57),
            warning: ColorSpec::rgb(140, 108, 62),
            error: ColorSpec::rgb(245, 42, 101),
            border_active: ColorSpec::rgb(46, 126, 233),
            border_normal: ColorSpec::rgb(168, 174, 203),
            highlight_bg: ColorSpec::rgb(196, 200, 218),
            highlight_fg: ColorSpec::rgb(52, 59, 88),
            footer_normal: ColorSpec::rgb(46, 126, 233),
            footer_search: ColorSpec::rgb(140, 108, 62),
            footer_edit: ColorSpec::rgb(88, 117, 57),
            footer_confirm: ColorSpec::rgb(245, 42, 101),
        }
    }

    /// Get theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "midnight" => Some(Self::midnight()),
            "daylight" => Some(Self::daylight()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec!["midnight".to_string(), "daylight".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_available_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).expect("listed theme");
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::from_name("tokyo-night").is_none());
        assert_eq!(Theme::default().name, "midnight");
    }
}
