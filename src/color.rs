use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{Medal, Sex};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

/// Map a normalised magnitude `t` in `[0, 1]` onto a purple→yellow ramp,
/// standing in for the value-coloured bars of the source charts.
pub fn heat_color(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0) as f32;
    let hue = 270.0 - 210.0 * t;
    hsl_to_color32(Hsl::new(hue, 0.8, 0.35 + 0.25 * t))
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Fixed series colours
// ---------------------------------------------------------------------------

pub fn sex_color(sex: Sex) -> Color32 {
    match sex {
        Sex::Male => Color32::from_rgb(0x3b, 0x82, 0xc4),
        Sex::Female => Color32::from_rgb(0xd4, 0x5d, 0x87),
    }
}

pub fn medal_color(medal: Medal) -> Color32 {
    match medal {
        Medal::Gold => Color32::from_rgb(0xd4, 0xaf, 0x37),
        Medal::Silver => Color32::from_rgb(0xa8, 0xa8, 0xa8),
        Medal::Bronze => Color32::from_rgb(0xb0, 0x6c, 0x3b),
    }
}
