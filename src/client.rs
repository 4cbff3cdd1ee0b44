//! The bulb protocol client boundary.
//!
//! The TCP session, byte-level command encoding, and state parsing live in
//! an external client crate. This module defines the capability surface the
//! adapter consumes: implement [`ProtocolClient`] for the client type and
//! hand it to [`FluxLight`](crate::FluxLight).

use std::io;

use serde::{Deserialize, Serialize};

use crate::types::{Color, ColorRGBW, ColorRGBWW, Transition};

/// The state a bulb reports, as decoded by the protocol client.
///
/// Channel values that the bulb does not drive in its current mode are
/// still present (reported as zero); the adapter decides which ones are
/// meaningful from the capability flags and the sub-mode string.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RawBulbState {
    /// The bulb's power flag. The normalized on state additionally
    /// requires a nonzero brightness.
    pub is_on: bool,
    /// The raw pattern code byte (static color modes, preset effects, and
    /// the custom-pattern code all share this field).
    pub pattern_code: u8,
    /// Device-reported overall brightness, 0-255.
    pub brightness: u8,
    /// The RGB channel triplet.
    pub rgb: Color,
    /// The RGB channels plus the single white channel.
    pub rgbw: ColorRGBW,
    /// The RGB channels plus both white channels (warm, cold).
    pub rgbww: ColorRGBWW,
    /// Whether the bulb carries a white channel at all.
    pub rgbw_capable: bool,
    /// Whether the bulb speaks the four-channel protocol variant.
    pub uses_rgbw_protocol: bool,
    /// The sub-mode string the bulb reports ("ww" while it drives only its
    /// warm-white channel).
    pub raw_mode: String,
}

/// A synchronous session with one bulb.
///
/// All calls block until the bulb has answered (or the underlying session
/// decides it won't); timeouts, retries and reconnects are the
/// implementation's business. Methods take `&mut self` because a session
/// is a stateful, single-conversation object.
pub trait ProtocolClient: Sized {
    /// Open a session against the bulb at `host`.
    fn connect(host: &str) -> io::Result<Self>;

    /// Read the bulb's current state.
    fn fetch_state(&mut self) -> io::Result<RawBulbState>;

    /// Set the RGB channels, optionally scaled by a brightness.
    fn set_rgb(&mut self, red: u8, green: u8, blue: u8, brightness: Option<u8>) -> io::Result<()>;

    /// Set any subset of the color and white channels.
    ///
    /// `w` addresses the (warm) white channel, `w2` the second (cold)
    /// white channel on bulbs that have one. Omitted channels are left
    /// untouched by the bulb.
    #[allow(clippy::too_many_arguments)]
    fn set_rgbw(
        &mut self,
        red: Option<u8>,
        green: Option<u8>,
        blue: Option<u8>,
        w: Option<u8>,
        w2: Option<u8>,
        brightness: Option<u8>,
    ) -> io::Result<()>;

    /// Drive the warm-white channel alone.
    fn set_warm_white(&mut self, value: u8) -> io::Result<()>;

    /// Start a firmware preset pattern.
    fn set_preset_pattern(&mut self, code: u8, speed_pct: u8) -> io::Result<()>;

    /// Start a user-defined pattern.
    fn set_custom_pattern(
        &mut self,
        colors: &[Color],
        speed_pct: u8,
        transition: Transition,
    ) -> io::Result<()>;

    /// Power on; the bulb restores its own remembered levels.
    fn turn_on(&mut self) -> io::Result<()>;

    /// Power off.
    fn turn_off(&mut self) -> io::Result<()>;
}
