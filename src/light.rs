//! Individual light control.

use log::{debug, warn};
use rand::Rng;
use serde_json::{Value, json};
use strum::IntoEnumIterator;

use crate::client::{ProtocolClient, RawBulbState};
use crate::command::LightCommand;
use crate::config::{CustomEffect, DeviceConfig, Features};
use crate::errors::{Error, Result};
use crate::status::LightState;
use crate::types::{Color, ColorTemp, DeviceMode, EffectMode, EffectSpeed, HueSaturation};

/// Represents a single Flux LED / Magic Home light.
///
/// A `FluxLight` owns the protocol session to one bulb and a cache of the
/// bulb's state. [`refresh`](Self::refresh) pulls device truth and derives
/// the platform-facing attributes; the command methods translate intents
/// into protocol calls and update the cache optimistically, to be
/// reconciled by the next refresh.
///
/// All methods are blocking and take `&mut self`: one device, one
/// conversation at a time. Poll cadence and scheduling are the caller's
/// business.
///
/// # Example
///
/// ```no_run
/// use flux_lights_rs::{FluxLight, EffectSpeed, LightCommand, ProtocolClient};
/// # use flux_lights_rs::RawBulbState;
/// # struct Session;
/// # impl ProtocolClient for Session {
/// #     fn connect(_: &str) -> std::io::Result<Self> { Ok(Session) }
/// #     fn fetch_state(&mut self) -> std::io::Result<RawBulbState> { Ok(RawBulbState::default()) }
/// #     fn set_rgb(&mut self, _: u8, _: u8, _: u8, _: Option<u8>) -> std::io::Result<()> { Ok(()) }
/// #     fn set_rgbw(&mut self, _: Option<u8>, _: Option<u8>, _: Option<u8>, _: Option<u8>, _: Option<u8>, _: Option<u8>) -> std::io::Result<()> { Ok(()) }
/// #     fn set_warm_white(&mut self, _: u8) -> std::io::Result<()> { Ok(()) }
/// #     fn set_preset_pattern(&mut self, _: u8, _: u8) -> std::io::Result<()> { Ok(()) }
/// #     fn set_custom_pattern(&mut self, _: &[flux_lights_rs::Color], _: u8, _: flux_lights_rs::Transition) -> std::io::Result<()> { Ok(()) }
/// #     fn turn_on(&mut self) -> std::io::Result<()> { Ok(()) }
/// #     fn turn_off(&mut self) -> std::io::Result<()> { Ok(()) }
/// # }
///
/// fn run() -> flux_lights_rs::Result<()> {
///     let mut light: FluxLight<Session> =
///         FluxLight::connect("192_168_1_40", "Desk strip", "192.168.1.40", EffectSpeed::new())?;
///     light.refresh()?;
///
///     let mut command = LightCommand::new();
///     command.brightness(128);
///     light.turn_on(&command)?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct FluxLight<C> {
    unique_id: String,
    name: String,
    host: String,
    effect_speed: EffectSpeed,
    configured_mode: Option<DeviceMode>,
    configured_effect: Option<CustomEffect>,
    mode: Option<DeviceMode>,
    raw: Option<RawBulbState>,
    confirmed: Option<LightState>,
    pending: Option<LightState>,
    last_brightness: Option<u8>,
    last_hs_color: Option<HueSaturation>,
    client: C,
}

/// What a command resolves to once matched against the device's mode and
/// cached state. The branches are mutually exclusive; the first one that
/// applies wins, mirroring the bulb's own channel semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Plan {
    /// Drive the white channels to a color temperature.
    ColorTemperature { temp: ColorTemp, white: u8 },
    /// Drive the white channels to an explicit level (two-white-channel
    /// modes only).
    WhiteLevel { white: u8 },
    /// Resolve the synthetic random effect to a concrete color.
    RandomColor,
    /// Start a firmware preset.
    Preset { effect: EffectMode, code: u8 },
    /// Bare power-on; the bulb restores its own remembered levels.
    PowerOn,
    /// Set color and/or brightness levels.
    Levels {
        color: Color,
        brightness: Option<u8>,
        white: Option<u8>,
    },
}

impl<C: ProtocolClient> FluxLight<C> {
    /// Open a session to the bulb at `host` and wrap it in a light.
    ///
    /// Fails with [`Error::Connection`] when the session cannot be
    /// established; the device is not ready and construction should be
    /// retried later by the caller.
    pub fn connect(
        unique_id: &str,
        name: &str,
        host: &str,
        effect_speed: EffectSpeed,
    ) -> Result<Self> {
        let client = C::connect(host).map_err(|err| Error::connection(host, err))?;
        Ok(Self::with_client(
            unique_id,
            name,
            host,
            effect_speed,
            client,
        ))
    }

    /// Connect a device described by its configuration entry.
    pub fn from_config(
        unique_id: &str,
        config: &DeviceConfig,
        effect_speed: EffectSpeed,
    ) -> Result<Self> {
        let mut light = Self::connect(
            unique_id,
            config.display_name(),
            &config.host,
            effect_speed,
        )?;
        light.configure_mode(config.mode);
        if let Some(effect) = &config.custom_effect {
            light.configure_custom_effect(effect.clone());
        }
        Ok(light)
    }

    /// Wrap an already-established session.
    pub fn with_client(
        unique_id: &str,
        name: &str,
        host: &str,
        effect_speed: EffectSpeed,
        client: C,
    ) -> Self {
        FluxLight {
            unique_id: unique_id.to_string(),
            name: name.to_string(),
            host: host.to_string(),
            effect_speed,
            configured_mode: None,
            configured_effect: None,
            mode: None,
            raw: None,
            confirmed: None,
            pending: None,
            last_brightness: None,
            last_hs_color: None,
            client,
        }
    }

    /// Apply a configured channel layout.
    ///
    /// Only `Rgbcw` and `Rgbww` stick (they cannot be detected from the
    /// raw state); any other value is advisory and detection overrides it
    /// on the next refresh.
    pub fn configure_mode(&mut self, mode: DeviceMode) {
        if mode.is_sticky() {
            self.configured_mode = Some(mode);
        }
        self.mode = Some(mode);
    }

    /// Remember a configured custom pattern for this device.
    pub fn configure_custom_effect(&mut self, effect: CustomEffect) {
        self.configured_effect = Some(effect);
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn effect_speed(&self) -> EffectSpeed {
        self.effect_speed
    }

    /// The channel layout in use, once known.
    pub fn mode(&self) -> Option<DeviceMode> {
        self.mode
    }

    /// The configured custom pattern, if any.
    pub fn configured_custom_effect(&self) -> Option<&CustomEffect> {
        self.configured_effect.as_ref()
    }

    /// The current state view: the optimistic pending state when a command
    /// is in flight, otherwise the last confirmed state.
    pub fn state(&self) -> Option<&LightState> {
        self.pending.as_ref().or(self.confirmed.as_ref())
    }

    pub fn is_on(&self) -> bool {
        self.state().is_some_and(|state| state.is_on)
    }

    pub fn brightness(&self) -> Option<u8> {
        self.state().map(|state| state.brightness)
    }

    pub fn hue_saturation(&self) -> Option<HueSaturation> {
        self.state().map(|state| state.hue_saturation)
    }

    pub fn white_value(&self) -> Option<u8> {
        self.state().map(|state| state.white_value)
    }

    /// The running effect, if the bulb reports one.
    pub fn effect(&self) -> Option<EffectMode> {
        self.state().and_then(|state| state.effect)
    }

    /// What the device supports in its current mode.
    pub fn supported_features(&self) -> Features {
        Features::for_mode(self.mode.unwrap_or(DeviceMode::Rgb))
    }

    /// All effect names selectable through [`turn_on`](Self::turn_on).
    pub fn effect_list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = EffectMode::iter()
            .filter(|effect| effect.preset_code().is_some())
            .map(|effect| effect.name())
            .collect();
        names.sort_unstable();
        names.push(EffectMode::Random.name());
        names.push(EffectMode::Custom.name());
        names
    }

    /// Identity and cached state, for host debugging surfaces.
    pub fn diagnostics(&self) -> Value {
        json!({
            "unique_id": self.unique_id,
            "name": self.name,
            "host": self.host,
            "mode": self.mode.map(|mode| mode.name()),
            "effect_speed": self.effect_speed.value(),
            "state": self.state(),
            "pending_command": self.pending.is_some(),
            "last_brightness": self.last_brightness,
            "last_hs_color": self.last_hs_color,
        })
    }

    /// Fetch the bulb's state and rebuild the confirmed attributes.
    ///
    /// On a communication failure the cached state is left exactly as it
    /// was (stale but usable) and the error is returned for the caller to
    /// handle.
    pub fn refresh(&mut self) -> Result<()> {
        let raw = match self.client.fetch_state() {
            Ok(raw) => raw,
            Err(err) => {
                warn!("error updating {}: {err}", self.name);
                return Err(Error::communication("state refresh", err));
            }
        };

        let mode = self
            .configured_mode
            .unwrap_or_else(|| DeviceMode::from_raw(&raw));
        let previous_brightness = self.brightness().unwrap_or(0);
        let state = LightState::from_raw(&raw, mode, previous_brightness);

        if state.is_on {
            self.last_brightness = Some(state.brightness);
            self.last_hs_color = Some(state.hue_saturation);
        }

        self.mode = Some(mode);
        self.raw = Some(raw);
        self.confirmed = Some(state);
        self.pending = None;
        Ok(())
    }

    /// Apply a command, turning the light on if needed.
    ///
    /// Resolution is mutually exclusive and ordered: color temperature,
    /// then explicit white level, then effects, then a bare power-on, and
    /// finally color/brightness levels with remembered values filling the
    /// gaps. The local state is updated optimistically before the protocol
    /// call; a failed call is neither retried nor rolled back.
    pub fn turn_on(&mut self, command: &LightCommand) -> Result<()> {
        self.turn_on_with_rng(command, &mut rand::thread_rng())
    }

    /// [`turn_on`](Self::turn_on) with an explicit random source for the
    /// `random` effect.
    pub fn turn_on_with_rng<R: Rng>(&mut self, command: &LightCommand, rng: &mut R) -> Result<()> {
        let plan = self.plan(command);
        debug!("{}: {plan:?}", self.name);

        match plan {
            Plan::ColorTemperature { temp, white } => {
                self.apply_color_temperature(temp, white, command.brightness)
            }
            Plan::WhiteLevel { white } => self.apply_white_level(white),
            Plan::RandomColor => {
                let color = Color::random(rng);
                self.update_pending(|state| state.hue_saturation = HueSaturation::from_color(color));
                self.client
                    .set_rgbw(
                        Some(color.red()),
                        Some(color.green()),
                        Some(color.blue()),
                        None,
                        None,
                        None,
                    )
                    .map_err(|err| Error::communication("set color", err))
            }
            Plan::Preset { effect, code } => {
                self.update_pending(|state| state.effect = Some(effect));
                self.client
                    .set_preset_pattern(code, self.effect_speed.value())
                    .map_err(|err| Error::communication("set preset pattern", err))
            }
            Plan::PowerOn => {
                self.update_pending(|state| state.is_on = true);
                self.client
                    .turn_on()
                    .map_err(|err| Error::communication("turn on", err))
            }
            Plan::Levels {
                color,
                brightness,
                white,
            } => self.apply_levels(color, brightness, white),
        }
    }

    /// Turn the light off.
    ///
    /// The current brightness and color are remembered so that a later
    /// bare [`turn_on`](Self::turn_on) reports the same visible state. The
    /// local transition happens even when the protocol call fails.
    pub fn turn_off(&mut self) -> Result<()> {
        if let Some(state) = self.state() {
            let brightness = state.brightness;
            let hue_saturation = state.hue_saturation;
            self.last_brightness = Some(brightness);
            self.last_hs_color = Some(hue_saturation);
        }
        self.update_pending(|state| state.is_on = false);
        self.client
            .turn_off()
            .map_err(|err| Error::communication("turn off", err))
    }

    /// Start a user-defined color pattern.
    ///
    /// A device that is off is first powered on (restoring its remembered
    /// state), then the pattern command is issued.
    pub fn set_custom_effect(&mut self, effect: &CustomEffect) -> Result<()> {
        effect.validate()?;

        if !self.is_on() {
            self.turn_on(&LightCommand::new())?;
        }

        self.update_pending(|state| {
            state.is_on = true;
            state.effect = Some(EffectMode::Custom);
        });
        self.client
            .set_custom_pattern(
                &effect.colors,
                effect.speed_pct.value(),
                effect.transition,
            )
            .map_err(|err| Error::communication("set custom pattern", err))
    }

    /// Resolve a command against the current mode and cached state.
    fn plan(&self, command: &LightCommand) -> Plan {
        if let Some(temp) = command.color_temp {
            let white = command.white.unwrap_or_else(|| {
                let current = self.white_value().unwrap_or(0);
                if current > 0 { current } else { 255 }
            });
            return Plan::ColorTemperature { temp, white };
        }

        if let Some(white) = command.white {
            if matches!(self.mode, Some(DeviceMode::Rgbcw | DeviceMode::Rgbww)) {
                return Plan::WhiteLevel { white };
            }
        }

        match command.effect {
            Some(EffectMode::Random) => return Plan::RandomColor,
            Some(effect) => {
                if let Some(code) = effect.preset_code() {
                    return Plan::Preset { effect, code };
                }
            }
            None => {}
        }

        if command.positive_brightness().is_none() && command.hs_color.is_none() && !self.is_on() {
            return Plan::PowerOn;
        }

        let brightness = command.positive_brightness().or(self.last_brightness);
        let color = command
            .hs_color
            .or(self.last_hs_color)
            .map(|hs| hs.to_color())
            .unwrap_or_else(Color::white);
        let white = if self.mode == Some(DeviceMode::Rgbw) {
            command.positive_white().or_else(|| self.white_value())
        } else {
            command.positive_white()
        };

        Plan::Levels {
            color,
            brightness,
            white,
        }
    }

    fn apply_color_temperature(
        &mut self,
        temp: ColorTemp,
        white: u8,
        brightness: Option<u8>,
    ) -> Result<()> {
        if self.mode == Some(DeviceMode::Rgbcw) {
            let (warm, cold) = white_channels_for_temp(temp, white);
            return self
                .client
                .set_rgbw(None, None, None, Some(warm), Some(cold), None)
                .map_err(|err| Error::communication("set white temperature", err));
        }

        // Fixed white channels: pick the warm or cold slot and drive it
        // with the effective brightness.
        let level = brightness.or_else(|| self.brightness()).unwrap_or(255);
        let result = if temp.is_warm() {
            self.client.set_rgbw(None, None, None, Some(level), None, None)
        } else {
            self.client.set_rgbw(None, None, None, None, Some(level), None)
        };
        result.map_err(|err| Error::communication("set white temperature", err))
    }

    fn apply_white_level(&mut self, white: u8) -> Result<()> {
        match self.mode {
            Some(DeviceMode::Rgbcw) => {
                let (mut cold, mut warm) = self
                    .raw
                    .as_ref()
                    .map(|raw| (raw.rgbww.cold, raw.rgbww.warm))
                    .unwrap_or((0, 0));
                // Both channels idle: scale from the full-range baseline.
                if cold == 0 && warm == 0 {
                    cold = 255;
                    warm = 255;
                }
                let scale = f32::from(white) / 255.0;
                let warm = (f32::from(warm) * scale).round() as u8;
                let cold = (f32::from(cold) * scale).round() as u8;
                self.client
                    .set_rgbw(None, None, None, Some(warm), Some(cold), None)
                    .map_err(|err| Error::communication("set white level", err))
            }
            Some(DeviceMode::Rgbww) => self
                .client
                .set_warm_white(white)
                .map_err(|err| Error::communication("set white level", err)),
            // plan() only emits this branch for the two modes above.
            _ => Ok(()),
        }
    }

    fn apply_levels(
        &mut self,
        color: Color,
        brightness: Option<u8>,
        white: Option<u8>,
    ) -> Result<()> {
        self.update_pending(|state| {
            state.is_on = true;
            if let Some(brightness) = brightness {
                state.brightness = brightness;
            }
            state.hue_saturation = HueSaturation::from_color(color);
        });

        let result = match self.mode {
            Some(DeviceMode::White) => {
                self.client
                    .set_rgbw(Some(0), Some(0), Some(0), brightness, None, None)
            }
            Some(DeviceMode::Rgbw) => self.client.set_rgbw(
                Some(color.red()),
                Some(color.green()),
                Some(color.blue()),
                white,
                None,
                brightness,
            ),
            _ => self
                .client
                .set_rgb(color.red(), color.green(), color.blue(), brightness),
        };
        result.map_err(|err| Error::communication("set levels", err))
    }

    /// Mutate the optimistic state, starting from the current view.
    fn update_pending(&mut self, apply: impl FnOnce(&mut LightState)) {
        let mut state = self.state().cloned().unwrap_or_default();
        apply(&mut state);
        self.pending = Some(state);
    }
}

/// Map a mired color temperature onto the warm and cold white channels.
///
/// The mired range 500..153 is interpolated linearly onto 2700K..6500K,
/// the two channels are cross-faded over that span, and both are scaled by
/// `white`. When the warm channel dominates, the firmware expects the cold
/// channel driven at the same level.
fn white_channels_for_temp(temp: ColorTemp, white: u8) -> (u8, u8) {
    const MIRED_MIN: f32 = 500.0;
    const MIRED_MAX: f32 = 153.0;
    const KELVIN_MIN: f32 = 2700.0;
    const KELVIN_MAX: f32 = 6500.0;
    const KELVIN_SPAN: f32 = 3800.0;

    let kelvin = (f32::from(temp.mired()) - MIRED_MIN) / (MIRED_MAX - MIRED_MIN)
        * (KELVIN_MAX - KELVIN_MIN)
        + KELVIN_MIN;
    let kelvin = (kelvin - KELVIN_MIN).max(0.0);

    let mut warm = 255.0 * (1.0 - kelvin / KELVIN_SPAN);
    let mut cold = (255.0 * kelvin / KELVIN_SPAN).min(255.0);

    let scale = f32::from(white) / 255.0;
    warm *= scale;
    cold *= scale;

    if warm > cold {
        cold = warm;
    }

    (warm.round() as u8, cold.round() as u8)
}
