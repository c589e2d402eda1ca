//! Font-size scale with named aliases.
//!
//! The scale is an ordered sequence of pixel sizes. Aliases are a fixed
//! enum-to-index table, so `FONT_SIZES[2]`, `FONT_SIZES[FontSizeAlias::Medium]`
//! and `FONT_SIZES.medium()` always name the same value.

use std::ops::Index;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Number of steps in the scale.
pub const FONT_SIZE_COUNT: usize = 7;

/// Named positions in the font-size scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontSizeAlias {
    ExtraSmall,
    Small,
    Medium,
    MediumLarge,
    Large,
    ExtraLarge,
}

impl FontSizeAlias {
    /// Every alias, in scale order.
    pub const ALL: [Self; 6] = [
        Self::ExtraSmall,
        Self::Small,
        Self::Medium,
        Self::MediumLarge,
        Self::Large,
        Self::ExtraLarge,
    ];

    /// Position in the scale this alias is bound to.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ExtraSmall => 0,
            Self::Small => 1,
            Self::Medium => 2,
            Self::MediumLarge => 3,
            Self::Large => 4,
            Self::ExtraLarge => 5,
        }
    }

    /// camelCase name used in serialized output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ExtraSmall => "extraSmall",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::MediumLarge => "mediumLarge",
            Self::Large => "large",
            Self::ExtraLarge => "extraLarge",
        }
    }
}

/// Ordered font sizes in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSizes {
    values: [u16; FONT_SIZE_COUNT],
}

impl FontSizes {
    #[must_use]
    pub const fn new(values: [u16; FONT_SIZE_COUNT]) -> Self {
        Self { values }
    }

    /// The full scale, smallest first.
    #[must_use]
    pub const fn values(&self) -> &[u16; FONT_SIZE_COUNT] {
        &self.values
    }

    /// Size at `index`, or `None` past the end of the scale.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u16> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub const fn alias(&self, alias: FontSizeAlias) -> u16 {
        self.values[alias.index()]
    }

    #[must_use]
    pub const fn extra_small(&self) -> u16 {
        self.alias(FontSizeAlias::ExtraSmall)
    }

    #[must_use]
    pub const fn small(&self) -> u16 {
        self.alias(FontSizeAlias::Small)
    }

    #[must_use]
    pub const fn medium(&self) -> u16 {
        self.alias(FontSizeAlias::Medium)
    }

    #[must_use]
    pub const fn medium_large(&self) -> u16 {
        self.alias(FontSizeAlias::MediumLarge)
    }

    #[must_use]
    pub const fn large(&self) -> u16 {
        self.alias(FontSizeAlias::Large)
    }

    #[must_use]
    pub const fn extra_large(&self) -> u16 {
        self.alias(FontSizeAlias::ExtraLarge)
    }
}

impl Index<usize> for FontSizes {
    type Output = u16;

    fn index(&self, index: usize) -> &u16 {
        &self.values[index]
    }
}

impl Index<FontSizeAlias> for FontSizes {
    type Output = u16;

    fn index(&self, alias: FontSizeAlias) -> &u16 {
        &self.values[alias.index()]
    }
}

/// Serializes as `{ "values": [...], "aliases": { "extraSmall": 12, ... } }`.
impl Serialize for FontSizes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FontSizes", 2)?;
        state.serialize_field("values", &self.values)?;
        state.serialize_field("aliases", &AliasTable(self))?;
        state.end()
    }
}

struct AliasTable<'a>(&'a FontSizes);

impl Serialize for AliasTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FontSizeAlias::ALL.len()))?;
        for alias in FontSizeAlias::ALL {
            map.serialize_entry(alias.name(), &self.0.alias(alias))?;
        }
        map.end()
    }
}

pub const FONT_SIZES: FontSizes = FontSizes::new([12, 14, 16, 18, 20, 24, 32]);

#[cfg(test)]
#[path = "font_sizes_test.rs"]
mod tests;
