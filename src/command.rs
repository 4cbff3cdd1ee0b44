//! Light command intents.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::{ColorTemp, EffectMode, HueSaturation};

/// A set of attributes to apply to a light in one command.
///
/// Every field is optional; [`FluxLight::turn_on`](crate::FluxLight::turn_on)
/// resolves the combination against the device's current mode and cached
/// state. An empty command on a device that is off is a plain power-on.
///
/// # Creating commands
///
/// 1. **From a single attribute** using the [`From`] trait:
///    ```
///    use flux_lights_rs::{EffectMode, LightCommand};
///    let command = LightCommand::from(&EffectMode::Colorloop);
///    ```
///
/// 2. **Builder pattern** for combining attributes:
///    ```
///    use flux_lights_rs::{HueSaturation, LightCommand};
///    let mut command = LightCommand::new();
///    command.hs_color(HueSaturation::create(30, 80).unwrap());
///    command.brightness(200);
///    ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone)]
pub struct LightCommand {
    pub(crate) hs_color: Option<HueSaturation>,
    pub(crate) brightness: Option<u8>,
    pub(crate) white: Option<u8>,
    pub(crate) color_temp: Option<ColorTemp>,
    pub(crate) effect: Option<EffectMode>,
}

impl LightCommand {
    /// Create a new empty command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target color as hue and saturation.
    pub fn hs_color(&mut self, hs: HueSaturation) {
        self.hs_color = Some(hs);
    }

    /// Set the target brightness (0-255).
    pub fn brightness(&mut self, value: u8) {
        self.brightness = Some(value);
    }

    /// Set the target white channel value (0-255).
    pub fn white(&mut self, value: u8) {
        self.white = Some(value);
    }

    /// Set the target color temperature.
    pub fn color_temp(&mut self, temp: ColorTemp) {
        self.color_temp = Some(temp);
    }

    /// Set the effect to start.
    pub fn effect(&mut self, effect: EffectMode) {
        self.effect = Some(effect);
    }

    /// Set the effect by its command name.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::LightCommand;
    ///
    /// let mut command = LightCommand::new();
    /// command.effect_name("colorjump").unwrap();
    /// assert!(command.effect_name("disco").is_err());
    /// ```
    pub fn effect_name(&mut self, name: &str) -> Result<(), Error> {
        let effect =
            EffectMode::from_str(name).map_err(|_| Error::InvalidEffectName(name.to_string()))?;
        self.effect = Some(effect);
        Ok(())
    }

    /// Brightness with a zero value treated as absent.
    ///
    /// Hosts send 0 to mean "no preference", so the level-resolution
    /// branches fall back to remembered values for it.
    pub(crate) fn positive_brightness(&self) -> Option<u8> {
        self.brightness.filter(|value| *value > 0)
    }

    /// White with a zero value treated as absent (same convention).
    pub(crate) fn positive_white(&self) -> Option<u8> {
        self.white.filter(|value| *value > 0)
    }
}

impl From<&HueSaturation> for LightCommand {
    fn from(hs: &HueSaturation) -> Self {
        let mut command = LightCommand::new();
        command.hs_color(*hs);
        command
    }
}

impl From<&ColorTemp> for LightCommand {
    fn from(temp: &ColorTemp) -> Self {
        let mut command = LightCommand::new();
        command.color_temp(*temp);
        command
    }
}

impl From<&EffectMode> for LightCommand {
    fn from(effect: &EffectMode) -> Self {
        let mut command = LightCommand::new();
        command.effect(*effect);
        command
    }
}
