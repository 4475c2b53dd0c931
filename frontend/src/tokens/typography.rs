// Typography token system.

pub const FONT_FAMILY_SANS: &str = "'Inter', 'system-ui', 'Segoe UI', 'Arial', sans-serif";

pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_18: u32 = 18;
pub const FONT_SIZE_20: u32 = 20;
pub const FONT_SIZE_24: u32 = 24;
pub const FONT_SIZE_30: u32 = 30;
pub const FONT_SIZE_36: u32 = 36;
pub const FONT_SIZE_56: u32 = 56;

pub const LINE_HEIGHT_140: u32 = 140;
pub const LINE_HEIGHT_160: u32 = 160;
