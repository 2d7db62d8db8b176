use plotters::style::RGBColor;
use shared::ComparisonKind;

/// Slice colours, reused in order once categories outnumber them
pub const PALETTE: [RGBColor; 6] = [
    RGBColor(0x1a, 0xbc, 0x9c),
    RGBColor(0x34, 0x98, 0xdb),
    RGBColor(0x9b, 0x59, 0xb6),
    RGBColor(0xf3, 0x9c, 0x12),
    RGBColor(0xe7, 0x4c, 0x3c),
    RGBColor(0x2e, 0xcc, 0x71),
];

pub const DAY_SERIES: [RGBColor; 2] = [RGBColor(0x34, 0x98, 0xdb), RGBColor(0xf3, 0x9c, 0x12)];
pub const MONTH_SERIES: [RGBColor; 2] = [RGBColor(0x2e, 0xcc, 0x71), RGBColor(0xe7, 0x4c, 0x3c)];

pub fn slice_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

pub fn series_colors(kind: ComparisonKind) -> [RGBColor; 2] {
    match kind {
        ComparisonKind::Days => DAY_SERIES,
        ComparisonKind::Months => MONTH_SERIES,
    }
}
