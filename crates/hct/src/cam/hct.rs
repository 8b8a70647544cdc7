//! HCT color type
//!
//! HCT = CAM16 hue + CAM16 chroma + L\* tone. The stored hue and chroma are
//! the ones the resolved ARGB color actually has, which can differ from the
//! requested values when the request is outside the sRGB gamut.

use std::str::FromStr;

use super::cam16::Cam16;
use super::solver::solve_to_argb;
use crate::color::linear::lstar_from_argb;
use crate::color::{Argb, Lab};
use crate::error::ParseColorError;

/// A color in the HCT color space.
///
/// `Hct` is an immutable value: every constructor resolves the color to an
/// sRGB [`Argb`] and reads hue, chroma and tone back from it, so two `Hct`
/// values built from the same request are equal.
///
/// # Components
///
/// - hue: CAM16 hue angle in degrees, `[0.0, 360.0)`
/// - chroma: CAM16 chroma, `0.0` for grays; the sRGB maximum depends on hue and tone
/// - tone: L\*, `0.0` (black) to `100.0` (white)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    /// Create the sRGB color closest to the requested hue, chroma and tone.
    ///
    /// # Arguments
    /// * `hue` - Hue angle in degrees (normalized into `[0.0, 360.0)`)
    /// * `chroma` - Requested chroma; reduced to the gamut maximum if unreachable
    /// * `tone` - L\* (0.0..=100.0)
    ///
    /// # Example
    /// ```
    /// use hct::Hct;
    ///
    /// let blue = Hct::from_hct(282.0, 48.0, 40.0);
    /// assert!((blue.tone() - 40.0).abs() < 0.5);
    /// ```
    pub fn from_hct(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::from_argb(solve_to_argb(hue, chroma, tone))
    }

    /// Read hue, chroma and tone of an ARGB color.
    pub fn from_argb(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: lstar_from_argb(argb),
            argb,
        }
    }

    /// Hue angle in degrees, `[0.0, 360.0)`
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// CAM16 chroma
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Tone (L\*), `0.0..=100.0`
    #[inline]
    pub fn tone(&self) -> f64 {
        self.tone
    }

    /// The resolved device color.
    #[inline]
    pub fn to_argb(&self) -> Argb {
        self.argb
    }

    /// CIE L\*a\*b\* coordinates of the resolved device color.
    #[inline]
    pub fn to_lab(&self) -> Lab {
        Lab::from(self.argb)
    }

    /// Same chroma and tone at a different hue.
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::from_hct(hue, self.chroma, self.tone)
    }

    /// Same hue and tone at a different chroma.
    pub fn with_chroma(&self, chroma: f64) -> Self {
        Self::from_hct(self.hue, chroma, self.tone)
    }

    /// Same hue and chroma at a different tone.
    pub fn with_tone(&self, tone: f64) -> Self {
        Self::from_hct(self.hue, self.chroma, tone)
    }
}

impl From<Argb> for Hct {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Hct> for Argb {
    fn from(hct: Hct) -> Self {
        hct.argb
    }
}

impl FromStr for Hct {
    type Err = ParseColorError;

    /// Parse a hex color (see [`Argb`]'s `FromStr`) into HCT.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_argb(s.parse()?))
    }
}
