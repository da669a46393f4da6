//! Colors shared by every chart.

use plotters::style::RGBColor;

/// Qualitative palette for categorical groups.
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(99, 110, 250),
    RGBColor(239, 85, 59),
    RGBColor(0, 204, 150),
    RGBColor(171, 99, 250),
    RGBColor(255, 161, 90),
    RGBColor(25, 211, 243),
    RGBColor(255, 102, 146),
    RGBColor(182, 232, 128),
    RGBColor(255, 151, 255),
    RGBColor(254, 203, 82),
];

/// Color for the `index`-th group, cycling through [`PALETTE`].
pub fn group_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

// Inferno - 10
const INFERNO: [RGBColor; 10] = [
    RGBColor(0, 0, 4),
    RGBColor(27, 12, 65),
    RGBColor(74, 12, 107),
    RGBColor(120, 28, 109),
    RGBColor(165, 44, 96),
    RGBColor(207, 68, 70),
    RGBColor(237, 105, 37),
    RGBColor(251, 155, 6),
    RGBColor(247, 209, 61),
    RGBColor(252, 255, 164),
];

/// Inferno sequential color at position `t` in `[0, 1]` (clamped).
pub fn inferno(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let pos = t * (INFERNO.len() - 1) as f64;
    let i = (pos.floor() as usize).min(INFERNO.len() - 2);
    let frac = pos - i as f64;
    let (a, b) = (INFERNO[i], INFERNO[i + 1]);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Inferno color for `value` relative to `domain`; a flat domain maps to the middle.
pub fn inferno_in(value: f64, (lo, hi): (f64, f64)) -> RGBColor {
    if hi > lo {
        inferno((value - lo) / (hi - lo))
    } else {
        inferno(0.5)
    }
}
