//! Letter-spacing scale.

pub type LetterSpacings = [&'static str; 5];

pub const LETTER_SPACINGS: LetterSpacings = ["0.06px", "0.07px", "0.08px", "0.09px", "0.1px"];
