//! Color conversion helpers for the color picker

use rand::Rng;

/// A color in HSV space.
///
/// `h` is in degrees `[0, 360)`, `s` and `v` are percentages `[0, 100]`,
/// matching the ranges accepted by [`hsv_to_hex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Convert to a `#rrggbb` string
    pub fn to_hex(&self) -> String {
        hsv_to_hex(self.h, self.s, self.v)
    }
}

/// Parse a hex color into RGB channels.
///
/// Accepts `#rrggbb`, `rrggbb` and the `#rgb` shorthand. Anything else is
/// treated as black.
pub fn hex_to_rgb(color: &str) -> [u8; 3] {
    let digits = color.trim().trim_start_matches('#');
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    if expanded.len() != 6 || !expanded.is_ascii() {
        return [0, 0, 0];
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        match u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16) {
            Ok(value) => *channel = value,
            Err(_) => return [0, 0, 0],
        }
    }
    rgb
}

/// Convert a hex color to HSV.
pub fn hex_to_hsv(color: &str) -> Hsv {
    let [r, g, b] = hex_to_rgb(color).map(f64::from);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max / 255.0;
    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 {
        0.0
    } else if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsv {
        h: h * 60.0,
        s: s * 100.0,
        v: v * 100.0,
    }
}

/// Convert HSV (hue in degrees, saturation and value in percent) to `#rrggbb`.
pub fn hsv_to_hex(h: f64, s: f64, v: f64) -> String {
    let s = (s / 100.0).clamp(0.0, 1.0);
    let v = (v / 100.0).clamp(0.0, 1.0);
    let h = h / 360.0;

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let [r, g, b] = [r, g, b].map(to_channel);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Produce a random light pastel color as a CSS `hsl()` string.
pub fn random_pastel_color() -> String {
    let hue: u32 = rand::thread_rng().gen_range(0..360);
    format!("hsl({}, 40%, 80%)", hue)
}
