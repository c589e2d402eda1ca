//! Named color palette.

use serde::Serialize;

/// Palette of hex color strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub primary_light: &'static str,
    pub secondary: &'static str,
    pub secondary_dark: &'static str,
    pub secondary_light: &'static str,
    pub border: &'static str,
    pub danger: &'static str,
    pub danger_dark: &'static str,
    pub danger_light: &'static str,
    pub black: &'static str,
    pub white: &'static str,
    pub text: &'static str,
    pub sub_text: &'static str,
    pub gray: &'static str,
}

pub const COLORS: Colors = Colors {
    primary: "#3f51b5",
    primary_dark: "#2c387e",
    primary_light: "#6573c3",
    secondary: "#f50057",
    secondary_dark: "#ab003c",
    secondary_light: "#f73378",
    border: "#cdced2",
    danger: "#ed1c24",
    danger_dark: "#a51319",
    danger_light: "#f04e55",
    black: "#000000",
    white: "#ffffff",
    text: "#000000",
    sub_text: "#7c7c7c",
    gray: "#f5f5f5",
};
