//! Spacing scale used for margins and padding.

/// Ordered spacing steps, smallest first.
pub type Space = [&'static str; 5];

pub const SPACE: Space = ["0px", "8px", "16px", "32px", "64px"];
