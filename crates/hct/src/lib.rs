// Color science code -- suppress clippy lints that are impractical to fix
// (published matrix constants, single-letter component names, etc.)
#![allow(
    clippy::excessive_precision,
    clippy::many_single_char_names,
    clippy::needless_range_loop,
    clippy::manual_range_contains
)]

//! hct: The HCT color space (hue, chroma, tone)
//!
//! HCT combines the hue and chroma of the CAM16 color appearance model with
//! the lightness (L\*) of CIE L\*a\*b\*. Hue and chroma describe what a color
//! looks like; tone describes how light it is, and tone differences map
//! directly onto contrast ratios.
//!
//! # Quick Start
//!
//! ```
//! use hct::{Argb, Hct};
//!
//! let lavender = Hct::from_hct(309.0, 78.1, 87.7);
//! let argb: Argb = lavender.to_argb();
//!
//! // Round-tripping through 8-bit sRGB keeps the tone very close.
//! let back = Hct::from_argb(argb);
//! assert!((back.tone() - 87.7).abs() < 0.5);
//! ```
//!
//! # Color Spaces
//!
//! - [`Argb`]: packed 8-bit sRGB with alpha, the device representation
//! - [`Lab`]: CIE L\*a\*b\* under D65, used for perceptual metrics
//! - [`Cam16`]: CAM16 color appearance model under [`ViewingConditions`]
//! - [`Hct`]: CAM16 hue and chroma plus L\* tone
//!
//! # Pipeline Overview
//!
//! ```text
//! Argb ──> linear RGB (0..100) ──> XYZ ──┬──> Lab   (tone = L*)
//!                                        │
//!                                        └──> Cam16 (hue, chroma)
//!
//! (hue, chroma, tone) ──> solver ──> Argb
//! ```
//!
//! The inverse direction (HCT to sRGB) has no closed form. The solver first
//! tries to invert CAM16 directly by Newton iteration on J, and when the
//! requested chroma is out of gamut it bisects along the sRGB cube boundary
//! at the requested luminance to find the most chromatic color with the
//! requested hue.

pub mod cam;
pub mod color;
pub mod error;
pub mod math;


pub use cam::{Cam16, Hct, ViewingConditions};
pub use color::{Argb, Lab};
pub use error::ParseColorError;
