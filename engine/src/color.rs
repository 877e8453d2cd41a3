//! Colors and the Hue Cycle
//!
//! The rainbow variant paints each new cell one hue degree further around the
//! color wheel than the previous one, at full saturation and value.

use serde::{Deserialize, Serialize};

/// Degrees in a full hue rotation
pub const HUE_DEGREES: u16 = 360;

/// 24-bit color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Convert HSV to RGB
///
/// `h` in degrees (taken mod 360), `s` and `v` in `0.0..=1.0`.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// Hue that advances one degree per frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorCycle {
    hue: u16,
}

impl ColorCycle {
    #[must_use]
    pub const fn new() -> Self {
        Self { hue: 0 }
    }

    /// Current hue in `0..360`
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Color for the current hue, then advance the hue by one degree
    pub fn next_color(&mut self) -> Rgb {
        let color = hsv_to_rgb(f64::from(self.hue), 1.0, 1.0);
        self.hue = (self.hue + 1) % HUE_DEGREES;
        color
    }

    /// Back to hue 0
    pub fn reset(&mut self) {
        self.hue = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_secondary_colors() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Rgb::new(255, 0, 255));
    }

    #[test]
    fn test_hue_wraps_input() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(200.0, 0.0, 1.0), Rgb::WHITE);
        assert_eq!(hsv_to_rgb(200.0, 0.0, 0.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_cycle_returns_after_full_rotation() {
        let mut cycle = ColorCycle::new();
        let first = cycle.next_color();
        assert_eq!(first, Rgb::new(255, 0, 0));
        assert_eq!(cycle.hue(), 1);

        for _ in 1..360 {
            cycle.next_color();
        }
        assert_eq!(cycle.hue(), 0);
        assert_eq!(cycle.next_color(), first);
    }

    #[test]
    fn test_reset() {
        let mut cycle = ColorCycle::new();
        for _ in 0..42 {
            cycle.next_color();
        }
        assert_eq!(cycle.hue(), 42);
        cycle.reset();
        assert_eq!(cycle.hue(), 0);
    }
}
