//! Line-height scale. Index `i` pairs with font size `i`.

pub type LineHeights = [&'static str; 7];

pub const LINE_HEIGHTS: LineHeights = ["17px", "19px", "22px", "26px", "28px", "37px", "43px"];
