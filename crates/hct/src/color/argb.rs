//! ARGB color type
//!
//! ARGB packs alpha and 8-bit gamma-encoded sRGB channels into one `u32`
//! (`0xAARRGGBB`). It is the device representation every other color
//! space in this crate converts to and from.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A color in packed 8-bit ARGB form (`0xAARRGGBB`).
///
/// Colors produced by this crate are always opaque (alpha = 255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    /// Create an opaque color from 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use hct::Argb;
    /// let red = Argb::from_rgb(255, 0, 0);
    /// assert_eq!(red.0, 0xffff0000);
    /// ```
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xff00_0000 | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    /// Alpha channel (0..=255)
    #[inline]
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel (0..=255)
    #[inline]
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel (0..=255)
    #[inline]
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel (0..=255)
    #[inline]
    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Whether the alpha channel is fully opaque.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.alpha() == 255
    }

    /// Lowercase `#rrggbb` hex string (alpha is dropped).
    ///
    /// # Example
    /// ```
    /// use hct::Argb;
    /// assert_eq!(Argb::from_rgb(255, 136, 0).to_hex(), "#ff8800");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(argb: Argb) -> Self {
        argb.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Argb {
    type Err = ParseColorError;

    /// Parse an opaque color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hct::Argb;
    ///
    /// let white: Argb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.0, 0xffffffff);
    ///
    /// let red: Argb = "#F00".parse().unwrap();
    /// assert_eq!(red.red(), 255);
    /// assert_eq!(red.green(), 0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidCharacter(c));
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_rgb(r, g, b))
            }
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}
