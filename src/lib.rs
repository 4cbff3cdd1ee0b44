//! # flux_lights_rs
//!
//! A Rust library for integrating Flux LED / Magic Home Wi-Fi smart lights
//! into a smart-home platform.
//!
//! This crate is the translation layer between platform light commands
//! (on/off, brightness, color, color temperature, effects) and the bulbs'
//! proprietary control calls. It polls a bulb's state, normalizes it into
//! platform-facing attributes, and resolves command intents against the
//! device's channel layout. The network protocol itself (TCP session,
//! command bytes, state parsing) lives in an external client crate and is
//! consumed through the [`ProtocolClient`] trait.
//!
//! ## Quick Start
//!
//! ```ignore
//! use flux_lights_rs::{EffectSpeed, FluxLight, LightCommand, HueSaturation};
//!
//! // BulbSession is your ProtocolClient implementation.
//! fn control_light() -> flux_lights_rs::Result<()> {
//!     let mut light: FluxLight<BulbSession> = FluxLight::connect(
//!         "192_168_1_40",
//!         "Living Room",
//!         "192.168.1.40",
//!         EffectSpeed::new(),
//!     )?;
//!
//!     // Pull device truth, then set a warm orange at half brightness.
//!     light.refresh()?;
//!     let mut command = LightCommand::new();
//!     command.hs_color(HueSaturation::create(30, 80).unwrap());
//!     command.brightness(128);
//!     light.turn_on(&command)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **State polling**: [`FluxLight::refresh`] derives mode, brightness,
//!   color, white value, and the running effect from one raw snapshot
//! - **RGB colors**: Set any color using [`HueSaturation`] or [`Color`]
//! - **Brightness**: Full 0-255 brightness control, remembered across
//!   off/on transitions
//! - **Color temperature**: Mired-based control using [`ColorTemp`],
//!   mapped onto the bulbs' warm/cold white channels
//! - **White channels**: RGBW, RGBCW, and RGBWW layouts via [`DeviceMode`]
//! - **Effects**: The firmware's preset patterns plus a client-side
//!   `random` effect using [`EffectMode`]
//! - **Custom patterns**: User-defined color sequences with
//!   [`CustomEffect`]
//! - **Configuration**: Serde-backed per-device and platform config with
//!   validation ([`DeviceConfig`], [`PlatformConfig`])
//!
//! ## Blocking model
//!
//! All device calls are synchronous and take `&mut self`: the host
//! serializes access per device and owns all scheduling (hosts typically
//! poll every few seconds; see [`config::DEFAULT_SCAN_INTERVAL`]). Run
//! them off any event-loop thread you care about. Commands update the
//! cached state optimistically; the next successful refresh reconciles
//! against device truth.

mod client;
mod command;
pub mod config;
mod errors;
mod light;
mod status;
mod types;

// Re-export public API
pub use client::{ProtocolClient, RawBulbState};
pub use command::LightCommand;
pub use config::{CustomEffect, DeviceConfig, Features, PlatformConfig, Protocol};
pub use errors::{Error, Result};
pub use light::FluxLight;
pub use status::LightState;
pub use types::{
    Color, ColorRGBW, ColorRGBWW, ColorTemp, DeviceMode, EffectMode, EffectSpeed, HueSaturation,
    Transition,
};
