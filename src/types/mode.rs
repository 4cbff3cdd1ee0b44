//! Channel layout modes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

use crate::client::RawBulbState;
use crate::errors::Error;

/// The channel layout a bulb is driven with.
///
/// `Rgb`, `Rgbw`, and `White` are detected from the raw state every
/// refresh. `Rgbcw` (separate cold and warm white channels) and `Rgbww`
/// (a single warm white channel next to RGB) are not detectable and only
/// take effect through per-device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeviceMode {
    Rgb,
    Rgbw,
    Rgbcw,
    Rgbww,
    /// White value driven by brightness; RGB channels are ignored.
    #[serde(rename = "w")]
    #[strum(serialize = "w")]
    White,
}

impl DeviceMode {
    /// Detect the mode from the raw state the bulb reports.
    ///
    /// The device's self-reported capabilities are authoritative: a bulb
    /// currently in its warm-white sub-mode is `White`, a bulb that carries
    /// a white channel without speaking the four-channel protocol is
    /// `Rgbw`, anything else is plain `Rgb`. `Rgbcw`/`Rgbww` never come out
    /// of detection.
    pub fn from_raw(raw: &RawBulbState) -> Self {
        if raw.raw_mode == "ww" {
            DeviceMode::White
        } else if raw.rgbw_capable && !raw.uses_rgbw_protocol {
            DeviceMode::Rgbw
        } else {
            DeviceMode::Rgb
        }
    }

    /// Parse a configuration mode literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::DeviceMode;
    ///
    /// assert_eq!(DeviceMode::create("rgbww").unwrap(), DeviceMode::Rgbww);
    /// assert_eq!(DeviceMode::create("w").unwrap(), DeviceMode::White);
    /// assert!(DeviceMode::create("rgbx").is_err());
    /// ```
    pub fn create(name: &str) -> Result<Self, Error> {
        Self::from_str(name).map_err(|_| Error::InvalidMode(name.to_string()))
    }

    /// The mode's name as used in configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::DeviceMode;
    ///
    /// assert_eq!(DeviceMode::Rgbcw.name(), "rgbcw");
    /// assert_eq!(DeviceMode::White.name(), "w");
    /// ```
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Whether configuration selecting this mode overrides detection.
    pub(crate) fn is_sticky(&self) -> bool {
        matches!(self, DeviceMode::Rgbcw | DeviceMode::Rgbww)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RawBulbState;

    fn raw() -> RawBulbState {
        RawBulbState::default()
    }

    #[test]
    fn warm_white_sub_mode_wins() {
        let mut state = raw();
        state.raw_mode = "ww".into();
        state.rgbw_capable = true;
        assert_eq!(DeviceMode::from_raw(&state), DeviceMode::White);
    }

    #[test]
    fn rgbw_needs_capability_without_rgbw_protocol() {
        let mut state = raw();
        state.rgbw_capable = true;
        state.uses_rgbw_protocol = false;
        assert_eq!(DeviceMode::from_raw(&state), DeviceMode::Rgbw);

        state.uses_rgbw_protocol = true;
        assert_eq!(DeviceMode::from_raw(&state), DeviceMode::Rgb);
    }

    #[test]
    fn plain_rgb_is_the_fallback() {
        assert_eq!(DeviceMode::from_raw(&raw()), DeviceMode::Rgb);
    }

    #[test]
    fn config_strings() {
        assert_eq!(serde_json::from_str::<DeviceMode>("\"w\"").unwrap(), DeviceMode::White);
        assert_eq!(
            serde_json::from_str::<DeviceMode>("\"rgbcw\"").unwrap(),
            DeviceMode::Rgbcw
        );
        assert!(serde_json::from_str::<DeviceMode>("\"rgbx\"").is_err());
    }
}
