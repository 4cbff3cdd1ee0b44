//! Device and platform configuration.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::types::{Color, DeviceMode, EffectSpeed, Transition};

/// How often a device's state should be polled by the host.
pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(5);

/// How often the network should be scanned for new devices when
/// `automatic_add` is enabled (the scan itself is the host's job).
pub const DEFAULT_NETWORK_SCAN_INTERVAL: Duration = Duration::from_secs(120);

/// Protocol variants that need to be selected explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Ledenet,
}

/// A user-defined color pattern.
///
/// Between 1 and 16 colors, cycled at a percentage speed with one of the
/// three transition styles the firmware knows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomEffect {
    pub colors: Vec<Color>,
    #[serde(default)]
    pub speed_pct: EffectSpeed,
    #[serde(default)]
    pub transition: Transition,
}

impl CustomEffect {
    pub const MAX_COLORS: usize = 16;

    /// Create a validated custom effect from loosely-typed parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::{Color, CustomEffect};
    ///
    /// let effect = CustomEffect::create(
    ///     vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)],
    ///     80,
    ///     "jump",
    /// )
    /// .unwrap();
    /// assert_eq!(effect.colors.len(), 2);
    ///
    /// assert!(CustomEffect::create(vec![], 50, "gradual").is_err());
    /// assert!(CustomEffect::create(vec![Color::white()], 101, "gradual").is_err());
    /// assert!(CustomEffect::create(vec![Color::white()], 50, "wobble").is_err());
    /// ```
    pub fn create(colors: Vec<Color>, speed_pct: u8, transition: &str) -> Result<Self> {
        let transition = Transition::from_str(transition)
            .map_err(|_| Error::InvalidTransition(transition.to_string()))?;
        let effect = CustomEffect {
            colors,
            speed_pct: EffectSpeed::create(speed_pct).ok_or(Error::InvalidSpeed(speed_pct))?,
            transition,
        };
        effect.validate()?;
        Ok(effect)
    }

    /// Check the constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.colors.is_empty() || self.colors.len() > Self::MAX_COLORS {
            return Err(Error::InvalidColorCount(self.colors.len()));
        }
        if EffectSpeed::create(self.speed_pct.value()).is_none() {
            return Err(Error::InvalidSpeed(self.speed_pct.value()));
        }
        Ok(())
    }
}

/// Per-device configuration.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Display name; falls back to the host when omitted.
    pub name: Option<String>,
    pub host: String,
    /// The channel layout to drive the device with. Only `rgbcw` and
    /// `rgbww` stick; the other values are advisory and detection wins.
    #[serde(default = "DeviceConfig::default_mode")]
    pub mode: DeviceMode,
    #[serde(default)]
    pub protocol: Option<Protocol>,
    #[serde(default)]
    pub custom_effect: Option<CustomEffect>,
    /// Per-device effect speed, overriding the platform-wide value.
    #[serde(default)]
    pub effect_speed: Option<EffectSpeed>,
}

impl DeviceConfig {
    fn default_mode() -> DeviceMode {
        DeviceMode::Rgbw
    }

    /// Minimal configuration for a device at `host`.
    pub fn for_host(host: &str) -> Self {
        DeviceConfig {
            name: None,
            host: host.to_string(),
            mode: Self::default_mode(),
            protocol: None,
            custom_effect: None,
            effect_speed: None,
        }
    }

    /// The name to show for this device.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.host)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(effect) = &self.custom_effect {
            effect.validate()?;
        }
        Ok(())
    }
}

/// Platform-wide configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Configured devices, keyed by a stable device id.
    #[serde(default)]
    pub devices: HashMap<String, DeviceConfig>,
    /// Whether newly discovered bulbs are added without configuration.
    #[serde(default)]
    pub automatic_add: bool,
    /// Platform-wide effect speed for preset patterns.
    #[serde(default)]
    pub effect_speed: EffectSpeed,
}

impl PlatformConfig {
    pub fn validate(&self) -> Result<()> {
        for device in self.devices.values() {
            device.validate()?;
        }
        Ok(())
    }

    /// The effect speed to use for one device.
    pub fn effect_speed_for(&self, device_id: &str) -> EffectSpeed {
        self.devices
            .get(device_id)
            .and_then(|device| device.effect_speed)
            .unwrap_or(self.effect_speed)
    }
}

/// What a device supports in its current mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub brightness: bool,
    pub color: bool,
    pub effect: bool,
    pub white_value: bool,
    pub color_temp: bool,
}

impl Features {
    /// The feature set for a channel layout.
    pub fn for_mode(mode: DeviceMode) -> Self {
        Features {
            brightness: true,
            color: true,
            effect: true,
            white_value: matches!(
                mode,
                DeviceMode::Rgbw | DeviceMode::Rgbcw | DeviceMode::Rgbww
            ),
            color_temp: matches!(mode, DeviceMode::Rgbw | DeviceMode::Rgbcw),
        }
    }
}
