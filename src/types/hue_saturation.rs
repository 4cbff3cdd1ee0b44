//! Hue and Saturation color representation.

use serde::{Deserialize, Serialize};

use super::Color;

/// Hue and Saturation color representation.
///
/// The color model used by smart-home platforms for color pickers:
/// - Hue: the color angle on the color wheel (0-360 degrees)
/// - Saturation: the intensity of the color (0-100 percent)
///
/// Brightness is carried separately, so conversions to and from RGB fix
/// the value component at full scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueSaturation {
    hue: u16,
    saturation: u8,
}

impl HueSaturation {
    /// Create a new HueSaturation with the given values.
    ///
    /// # Arguments
    ///
    /// * `hue` - Hue angle in degrees (0-360)
    /// * `saturation` - Saturation percentage (0-100)
    ///
    /// Returns `None` if values are outside valid ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::HueSaturation;
    ///
    /// assert!(HueSaturation::create(0, 100).is_some());  // Red at full saturation
    /// assert!(HueSaturation::create(120, 50).is_some()); // Green at 50% saturation
    /// assert!(HueSaturation::create(361, 50).is_none()); // Invalid hue
    /// assert!(HueSaturation::create(180, 101).is_none()); // Invalid saturation
    /// ```
    pub fn create(hue: u16, saturation: u8) -> Option<Self> {
        if hue <= 360 && saturation <= 100 {
            Some(HueSaturation { hue, saturation })
        } else {
            None
        }
    }

    /// Get the hue value.
    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Get the saturation value.
    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Convert to an RGB Color.
    ///
    /// Uses HSV to RGB conversion with Value fixed at 255 (max brightness).
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::HueSaturation;
    ///
    /// let hs = HueSaturation::create(0, 100).unwrap();
    /// let color = hs.to_color();
    /// assert_eq!(color.red(), 255);
    /// assert_eq!(color.green(), 0);
    /// assert_eq!(color.blue(), 0);
    /// ```
    pub fn to_color(&self) -> Color {
        let h = f32::from(self.hue);
        let s = f32::from(self.saturation) / 100.0;
        let v: f32 = 1.0;

        if s == 0.0 {
            let gray = (v * 255.0).round() as u8;
            return Color::rgb(gray, gray, gray);
        }

        let h = h / 60.0;
        let i = h.floor() as i32;
        let f = h - i as f32;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match i % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Color::rgb(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }

    /// Derive hue and saturation from an RGB color.
    ///
    /// The value component is discarded: (128,0,0) and (255,0,0) both map
    /// to hue 0 at full saturation.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::{Color, HueSaturation};
    ///
    /// let hs = HueSaturation::from_color(Color::rgb(0, 255, 0));
    /// assert_eq!(hs.hue(), 120);
    /// assert_eq!(hs.saturation(), 100);
    ///
    /// let gray = HueSaturation::from_color(Color::rgb(200, 200, 200));
    /// assert_eq!(gray.saturation(), 0);
    /// ```
    pub fn from_color(color: Color) -> Self {
        let r = f32::from(color.red()) / 255.0;
        let g = f32::from(color.green()) / 255.0;
        let b = f32::from(color.blue()) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0.0 {
            0
        } else {
            ((delta / max) * 100.0).round() as u8
        };

        let hue = if delta < f32::EPSILON {
            0.0
        } else if (max - r).abs() < f32::EPSILON {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if (max - g).abs() < f32::EPSILON {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let hue = (hue.round() as u16) % 360;

        HueSaturation { hue, saturation }
    }
}

impl From<&HueSaturation> for Color {
    fn from(hs: &HueSaturation) -> Self {
        hs.to_color()
    }
}

impl From<Color> for HueSaturation {
    fn from(color: Color) -> Self {
        HueSaturation::from_color(color)
    }
}
