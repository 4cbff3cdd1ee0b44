//! Value types for light control parameters.

mod color;
mod color_temp;
mod effect;
mod hue_saturation;
mod mode;
mod speed;
mod transition;

pub use color::{Color, ColorRGBW, ColorRGBWW};
pub use color_temp::ColorTemp;
pub use effect::EffectMode;
pub use hue_saturation::HueSaturation;
pub use mode::DeviceMode;
pub use speed::EffectSpeed;
pub use transition::Transition;
