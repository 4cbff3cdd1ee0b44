//! RGB, RGBW, and RGBWW color representations.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An RGB color with red, green, and blue components (0-255 each).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl Color {
    /// Create a color with the given RGB values.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a default color (black: 0,0,0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Full white (255,255,255).
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Create a color with each channel drawn uniformly from 0-255.
    ///
    /// Used to resolve the synthetic `random` effect into a concrete color
    /// before anything is sent to the bulb.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::rgb(
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
        )
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parse from comma-separated string (e.g., "255,128,0").
    fn from_str(s: &str) -> Result<Self, String> {
        let parts: Vec<u8> = s.split(',').map(|c| c.parse().unwrap_or(0)).collect();
        if parts.len() == 3 {
            Ok(Self::rgb(parts[0], parts[1], parts[2]))
        } else {
            Err("Expected format: r,g,b".into())
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::rgb(red, green, blue)
    }
}

/// An RGBW color (RGB + a single warm white channel, 0-255 each).
///
/// This is the four-channel layout reported by bulbs speaking the plain
/// RGBW protocol; the white channel doubles as the brightness source in
/// white-only mode.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ColorRGBW {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub warm: u8,
}

impl ColorRGBW {
    pub fn new(red: u8, green: u8, blue: u8, warm: u8) -> Self {
        Self {
            red,
            green,
            blue,
            warm,
        }
    }

    pub fn to_rgb(&self) -> Color {
        Color::rgb(self.red, self.green, self.blue)
    }
}

impl FromStr for ColorRGBW {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        let parts: Vec<u8> = s.split(',').map(|c| c.parse().unwrap_or(0)).collect();
        if parts.len() == 4 {
            Ok(Self::new(parts[0], parts[1], parts[2], parts[3]))
        } else {
            Err("Expected format: r,g,b,w".into())
        }
    }
}

/// An RGBWW color (RGB + warm white + cold white, 0-255 each).
///
/// Bulbs with two white channels report the warm channel before the cold
/// one; the raw state quintuple keeps that order.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ColorRGBWW {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub warm: u8,
    pub cold: u8,
}

impl ColorRGBWW {
    pub fn new(red: u8, green: u8, blue: u8, warm: u8, cold: u8) -> Self {
        Self {
            red,
            green,
            blue,
            warm,
            cold,
        }
    }

    pub fn to_rgb(&self) -> Color {
        Color::rgb(self.red, self.green, self.blue)
    }

    pub fn to_rgbw(&self) -> ColorRGBW {
        ColorRGBW::new(self.red, self.green, self.blue, self.warm)
    }

    /// The brighter of the two white channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::ColorRGBWW;
    ///
    /// assert_eq!(ColorRGBWW::new(0, 0, 0, 128, 64).max_white(), 128);
    /// assert_eq!(ColorRGBWW::new(0, 0, 0, 10, 200).max_white(), 200);
    /// ```
    pub fn max_white(&self) -> u8 {
        self.warm.max(self.cold)
    }
}

impl FromStr for ColorRGBWW {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        let parts: Vec<u8> = s.split(',').map(|c| c.parse().unwrap_or(0)).collect();
        if parts.len() == 5 {
            Ok(Self::new(parts[0], parts[1], parts[2], parts[3], parts[4]))
        } else {
            Err("Expected format: r,g,b,ww,cw".into())
        }
    }
}
