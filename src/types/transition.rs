//! Transition styles for custom patterns.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

/// How a custom pattern moves between its colors.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Transition {
    /// Smooth fade from color to color.
    #[default]
    Gradual,
    /// Hard cut from color to color.
    Jump,
    /// Flash each color.
    Strobe,
}

impl Transition {
    /// The transition's name as used in configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use flux_lights_rs::Transition;
    ///
    /// assert_eq!(Transition::Gradual.name(), "gradual");
    /// ```
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
