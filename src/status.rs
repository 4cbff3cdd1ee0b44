//! Normalized light state.

use serde::{Deserialize, Serialize};

use crate::client::RawBulbState;
use crate::types::{DeviceMode, EffectMode, HueSaturation};

/// The platform-facing attributes derived from one raw bulb snapshot.
///
/// The adapter keeps two of these: the state confirmed by the last
/// successful refresh, and an optimistic pending state written by
/// commands. Readers always see the pending one when it exists; the next
/// refresh replaces both with device truth.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightState {
    pub is_on: bool,
    /// 0-255. Zero while on cannot happen: a reported on-flag with zero
    /// brightness normalizes to off.
    pub brightness: u8,
    pub hue_saturation: HueSaturation,
    /// 0-255; which channel(s) this reflects depends on the mode.
    pub white_value: u8,
    /// The running effect, if the pattern code maps to one.
    pub effect: Option<EffectMode>,
}

impl LightState {
    /// Normalize a raw snapshot under the given mode.
    ///
    /// `previous_brightness` carries over in the two-white-channel cases
    /// where the device reports no usable brightness of its own.
    pub(crate) fn from_raw(
        raw: &RawBulbState,
        mode: DeviceMode,
        previous_brightness: u8,
    ) -> Self {
        let (white_value, brightness) = match mode {
            DeviceMode::Rgbcw => {
                // Any active white channel means the bulb is in white mode
                // and the color brightness no longer applies.
                let brightness = if raw.rgbww.warm != 0 || raw.rgbww.cold != 0 {
                    0
                } else {
                    previous_brightness
                };
                (raw.rgbww.max_white(), brightness)
            }
            DeviceMode::Rgbww => {
                let brightness = if raw.raw_mode == "ww" {
                    0
                } else {
                    previous_brightness
                };
                (raw.rgbww.warm, brightness)
            }
            DeviceMode::White => (raw.rgbw.warm, raw.rgbw.warm),
            DeviceMode::Rgb | DeviceMode::Rgbw => (raw.rgbw.warm, raw.brightness),
        };

        LightState {
            is_on: raw.is_on && brightness > 0,
            brightness,
            hue_saturation: HueSaturation::from_color(raw.rgb),
            white_value,
            effect: EffectMode::create(raw.pattern_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, ColorRGBW, ColorRGBWW};

    fn raw_on(brightness: u8) -> RawBulbState {
        RawBulbState {
            is_on: true,
            brightness,
            ..RawBulbState::default()
        }
    }

    #[test]
    fn on_flag_with_zero_brightness_normalizes_to_off() {
        let state = LightState::from_raw(&raw_on(0), DeviceMode::Rgb, 0);
        assert!(!state.is_on);
        assert_eq!(state.brightness, 0);
    }

    #[test]
    fn on_flag_with_brightness_is_on() {
        let state = LightState::from_raw(&raw_on(128), DeviceMode::Rgb, 0);
        assert!(state.is_on);
        assert_eq!(state.brightness, 128);
    }

    #[test]
    fn white_mode_takes_brightness_from_the_white_channel() {
        let mut raw = raw_on(10);
        raw.rgbw = ColorRGBW::new(0, 0, 0, 200);
        raw.raw_mode = "ww".into();
        let state = LightState::from_raw(&raw, DeviceMode::White, 0);
        assert_eq!(state.brightness, 200);
        assert_eq!(state.white_value, 200);
    }

    #[test]
    fn rgbcw_active_white_channels_zero_the_brightness() {
        let mut raw = raw_on(99);
        raw.rgbww = ColorRGBWW::new(0, 0, 0, 180, 40);
        let state = LightState::from_raw(&raw, DeviceMode::Rgbcw, 77);
        assert_eq!(state.white_value, 180);
        assert_eq!(state.brightness, 0);
        assert!(!state.is_on);
    }

    #[test]
    fn rgbcw_idle_white_channels_carry_previous_brightness() {
        let state = LightState::from_raw(&raw_on(99), DeviceMode::Rgbcw, 77);
        assert_eq!(state.brightness, 77);
        assert!(state.is_on);
    }

    #[test]
    fn rgbww_reports_the_warm_channel() {
        let mut raw = raw_on(50);
        raw.rgbww = ColorRGBWW::new(1, 2, 3, 90, 0);
        let state = LightState::from_raw(&raw, DeviceMode::Rgbww, 50);
        assert_eq!(state.white_value, 90);
        assert_eq!(state.brightness, 50);

        raw.raw_mode = "ww".into();
        let state = LightState::from_raw(&raw, DeviceMode::Rgbww, 50);
        assert_eq!(state.brightness, 0);
    }

    #[test]
    fn color_and_effect_come_from_the_raw_channels() {
        let mut raw = raw_on(255);
        raw.rgb = Color::rgb(0, 0, 255);
        raw.pattern_code = 0x38;
        let state = LightState::from_raw(&raw, DeviceMode::Rgb, 0);
        assert_eq!(state.hue_saturation.hue(), 240);
        assert_eq!(state.effect, Some(EffectMode::Colorjump));
    }
}
