//! Color types and conversion utilities
//!
//! This module provides the device-facing and perceptual color types that
//! the CAM16/HCT models are built on.
//!
//! # Color Spaces
//!
//! - **Argb**: Packed 8-bit sRGB with alpha. Use for I/O.
//! - **Linear RGB**: Linear light intensity on a 0..100 scale, the domain of
//!   the XYZ matrices. Handled as plain `[f64; 3]` arrays.
//! - **Lab**: CIE L\*a\*b\* under D65. Use for perceptual metrics.
//!
//! # Example
//!
//! ```
//! use hct::{Argb, Lab};
//!
//! let orange: Argb = "#ff8800".parse().unwrap();
//! let lab = Lab::from(orange);
//!
//! // Orange sits on the warm (+a, +b) quadrant of L*a*b*
//! assert!(lab.a > 0.0 && lab.b > 0.0);
//! ```

mod argb;
mod lab;
pub mod linear;
mod lut;

pub use argb::Argb;
pub use lab::Lab;
pub(crate) use lut::CRITICAL_PLANES;
