//! Color appearance models
//!
//! - [`ViewingConditions`]: the environment a color is seen in
//! - [`Cam16`]: CAM16 appearance correlates (hue, chroma, lightness J, ...)
//! - [`Hct`]: CAM16 hue and chroma combined with L\* tone
//!
//! The `solver` module inverts HCT back to ARGB.

mod cam16;
mod hct;
pub mod solver;
mod viewing_conditions;

pub use cam16::Cam16;
pub use hct::Hct;
pub use viewing_conditions::ViewingConditions;
