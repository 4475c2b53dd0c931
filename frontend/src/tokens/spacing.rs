// Spacing token system.

pub const SPACING_4: u32 = 4;
pub const SPACING_8: u32 = 8;
pub const SPACING_12: u32 = 12;
pub const SPACING_16: u32 = 16;
pub const SPACING_20: u32 = 20;
pub const SPACING_24: u32 = 24;
pub const SPACING_32: u32 = 32;
pub const SPACING_48: u32 = 48;
pub const SPACING_64: u32 = 64;

/// Content column cap, matching the original layout's card width.
pub const CONTENT_MAX_WIDTH: u32 = 1100;

/// Below this viewport width the header collapses into the mobile menu.
pub const MOBILE_BREAKPOINT: u32 = 768;
