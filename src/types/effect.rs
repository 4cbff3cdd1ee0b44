//! Preset lighting effects.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Animated effects selectable on the bulb.
///
/// The named effects map one-to-one onto firmware pattern codes and are
/// started with a speed parameter. `Custom` is the code the bulb reports
/// while it is running a user-defined pattern; it cannot be started as a
/// preset. `Random` is synthetic: it has no wire code and is resolved to a
/// concrete RGB color before anything is sent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EffectMode {
    Colorloop,
    RedFade,
    GreenFade,
    BlueFade,
    YellowFade,
    CyanFade,
    PurpleFade,
    WhiteFade,
    RgCrossFade,
    RbCrossFade,
    GbCrossFade,
    Colorstrobe,
    RedStrobe,
    GreenStrobe,
    BlueStrobe,
    YellowStrobe,
    CyanStrobe,
    PurpleStrobe,
    WhiteStrobe,
    Colorjump,
    Custom,
    Random,
}

impl EffectMode {
    /// The firmware pattern code for this effect, if it has one.
    ///
    /// `Random` is resolved client-side and never reaches the wire.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::EffectMode;
    ///
    /// assert_eq!(EffectMode::Colorloop.code(), Some(0x25));
    /// assert_eq!(EffectMode::Colorjump.code(), Some(0x38));
    /// assert_eq!(EffectMode::Custom.code(), Some(0x60));
    /// assert_eq!(EffectMode::Random.code(), None);
    /// ```
    pub fn code(&self) -> Option<u8> {
        match self {
            EffectMode::Colorloop => Some(0x25),
            EffectMode::RedFade => Some(0x26),
            EffectMode::GreenFade => Some(0x27),
            EffectMode::BlueFade => Some(0x28),
            EffectMode::YellowFade => Some(0x29),
            EffectMode::CyanFade => Some(0x2A),
            EffectMode::PurpleFade => Some(0x2B),
            EffectMode::WhiteFade => Some(0x2C),
            EffectMode::RgCrossFade => Some(0x2D),
            EffectMode::RbCrossFade => Some(0x2E),
            EffectMode::GbCrossFade => Some(0x2F),
            EffectMode::Colorstrobe => Some(0x30),
            EffectMode::RedStrobe => Some(0x31),
            EffectMode::GreenStrobe => Some(0x32),
            EffectMode::BlueStrobe => Some(0x33),
            EffectMode::YellowStrobe => Some(0x34),
            EffectMode::CyanStrobe => Some(0x35),
            EffectMode::PurpleStrobe => Some(0x36),
            EffectMode::WhiteStrobe => Some(0x37),
            EffectMode::Colorjump => Some(0x38),
            EffectMode::Custom => Some(0x60),
            EffectMode::Random => None,
        }
    }

    /// The pattern code to send when starting this effect as a preset.
    ///
    /// `None` for `Custom` (started through the custom-pattern command,
    /// never as a preset) and `Random` (no wire code).
    pub fn preset_code(&self) -> Option<u8> {
        match self {
            EffectMode::Custom | EffectMode::Random => None,
            other => other.code(),
        }
    }

    /// Look up the effect reported by a raw pattern code byte.
    ///
    /// Returns `None` for codes outside the effect table (for example the
    /// codes the bulb uses for static color or white modes).
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::EffectMode;
    ///
    /// assert_eq!(EffectMode::create(0x38), Some(EffectMode::Colorjump));
    /// assert_eq!(EffectMode::create(0x60), Some(EffectMode::Custom));
    /// assert_eq!(EffectMode::create(0x61), None);
    /// ```
    pub fn create(code: u8) -> Option<Self> {
        EffectMode::iter().find(|effect| effect.code() == Some(code))
    }

    /// The effect's name as used in commands and configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::EffectMode;
    ///
    /// assert_eq!(EffectMode::RgCrossFade.name(), "rg_cross_fade");
    /// assert_eq!(EffectMode::Random.name(), "random");
    /// ```
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn pattern_codes_are_contiguous_and_unique() {
        let presets: Vec<EffectMode> = EffectMode::iter()
            .filter(|e| e.preset_code().is_some())
            .collect();
        assert_eq!(presets.len(), 20);

        for (i, effect) in presets.iter().enumerate() {
            assert_eq!(effect.preset_code(), Some(0x25 + i as u8));
        }
    }

    #[test]
    fn round_trips_through_raw_code() {
        for effect in EffectMode::iter() {
            if let Some(code) = effect.code() {
                assert_eq!(EffectMode::create(code), Some(effect));
            }
        }
    }

    #[test]
    fn parses_from_names() {
        assert_eq!(
            EffectMode::from_str("colorjump").unwrap(),
            EffectMode::Colorjump
        );
        assert_eq!(
            EffectMode::from_str("gb_cross_fade").unwrap(),
            EffectMode::GbCrossFade
        );
        assert_eq!(EffectMode::from_str("random").unwrap(), EffectMode::Random);
        assert!(EffectMode::from_str("disco").is_err());
    }
}
