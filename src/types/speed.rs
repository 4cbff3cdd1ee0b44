//! Animation speed for effects.

use serde::{Deserialize, Serialize};

/// Animation speed for preset and custom effects, from 0 to 100 percent.
///
/// Speed only affects animated effects (fades, strobes, jumps). A value of
/// 50 is the default; lower values slow the animation, higher values speed
/// it up.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct EffectSpeed {
    pub(crate) value: u8,
}

impl EffectSpeed {
    const MAX: u8 = 100;
    const DEFAULT: u8 = 50;

    /// Create a new EffectSpeed with the default value (50%).
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::EffectSpeed;
    ///
    /// assert_eq!(EffectSpeed::new().value(), 50);
    /// ```
    pub fn new() -> Self {
        EffectSpeed {
            value: Self::DEFAULT,
        }
    }

    /// Get the speed value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Create a new EffectSpeed with the given value.
    ///
    /// Returns `None` if value exceeds 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::EffectSpeed;
    ///
    /// assert!(EffectSpeed::create(0).is_some());
    /// assert!(EffectSpeed::create(100).is_some());
    /// assert!(EffectSpeed::create(101).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if Self::is_valid(value) {
            Some(EffectSpeed { value })
        } else {
            None
        }
    }

    /// Create an EffectSpeed, using the default if value is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::EffectSpeed;
    ///
    /// assert_eq!(EffectSpeed::create_or(70).value(), 70);
    /// assert_eq!(EffectSpeed::create_or(101).value(), 50);
    /// ```
    pub fn create_or(value: u8) -> Self {
        if Self::is_valid(value) {
            EffectSpeed { value }
        } else {
            Self::new()
        }
    }

    fn is_valid(value: u8) -> bool {
        value <= Self::MAX
    }
}

impl Default for EffectSpeed {
    fn default() -> Self {
        Self::new()
    }
}
