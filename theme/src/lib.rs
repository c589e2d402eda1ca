//! Static design tokens for the storefront UI.
//!
//! The theme is five independently declared tables merged into one
//! read-only [`Theme`]. Nothing here is computed at runtime: every value is
//! a constant and [`THEME`] is built at compile time, so any number of
//! readers can share it without synchronization.
//!
//! Serialized with serde, the theme produces exactly the top-level keys
//! `space`, `fontSizes`, `letterSpacings`, `lineHeights` and `colors`.

pub mod colors;
pub mod font_sizes;
pub mod letter_spacings;
pub mod line_heights;
pub mod space;

use serde::Serialize;

pub use colors::{COLORS, Colors};
pub use font_sizes::{FONT_SIZES, FontSizeAlias, FontSizes};
pub use letter_spacings::{LETTER_SPACINGS, LetterSpacings};
pub use line_heights::{LINE_HEIGHTS, LineHeights};
pub use space::{SPACE, Space};

/// The merged token table.
///
/// Sub-tables use disjoint keys by construction; there is no merge or
/// override logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub space: Space,
    pub font_sizes: FontSizes,
    pub letter_spacings: LetterSpacings,
    pub line_heights: LineHeights,
    pub colors: Colors,
}

/// Process-wide theme instance.
pub static THEME: Theme = Theme {
    space: SPACE,
    font_sizes: FONT_SIZES,
    letter_spacings: LETTER_SPACINGS,
    line_heights: LINE_HEIGHTS,
    colors: COLORS,
};

/// Borrow the process-wide theme.
#[must_use]
pub fn theme() -> &'static Theme {
    &THEME
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
