//! RGB colors with 8-bit channels.

use core::fmt::{self, Debug, Formatter};
use core::ops::Index;

//
// Types
//

/// An RGB color with `u8` channels.
///
/// Channels are stored in the order red, green, blue. Colors are what the
/// rasterizer writes into a color buffer; image exporters receive them as
/// raw byte triples or packed into `u32`s.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color3(pub [u8; 3]);

/// Returns a new RGB color with `r`, `g`, and `b` channels.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color3 {
    Color3([r, g, b])
}

/// Returns a gray color with all channels equal to `lum`.
pub const fn gray(lum: u8) -> Color3 {
    Color3([lum; 3])
}

//
// Inherent impls
//

impl Color3 {
    /// Black, (0, 0, 0).
    pub const BLACK: Self = gray(0x00);
    /// White, (255, 255, 255).
    pub const WHITE: Self = gray(0xFF);
    /// Red, (255, 0, 0).
    pub const RED: Self = rgb(0xFF, 0, 0);
    /// Green, (0, 255, 0).
    pub const GREEN: Self = rgb(0, 0xFF, 0);
    /// Blue, (0, 0, 255).
    pub const BLUE: Self = rgb(0, 0, 0xFF);

    /// Returns the red channel of `self`.
    #[inline]
    pub const fn r(&self) -> u8 {
        self.0[0]
    }
    /// Returns the green channel of `self`.
    #[inline]
    pub const fn g(&self) -> u8 {
        self.0[1]
    }
    /// Returns the blue channel of `self`.
    #[inline]
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Returns `self` with each channel multiplied by `intensity`,
    /// clamped to the range 0..=255.
    ///
    /// Negative and NaN intensities yield black.
    ///
    /// # Examples
    /// ```
    /// use tinyrast_core::math::color::rgb;
    ///
    /// let c = rgb(200, 100, 50);
    /// assert_eq!(c.shade(0.5), rgb(100, 50, 25));
    /// assert_eq!(c.shade(2.0), rgb(255, 200, 100));
    /// assert_eq!(c.shade(-1.0), rgb(0, 0, 0));
    /// ```
    #[must_use]
    pub fn shade(self, intensity: f64) -> Self {
        // `as` saturates out-of-range floats and maps NaN to zero
        Self(self.0.map(|ch| (ch as f64 * intensity) as u8))
    }

    /// Returns a `u32` containing the channel bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }

    /// Returns a `u32` containing the channel bytes of `self`
    /// in format `0xFF_RR_GG_BB`, that is, with full opacity.
    #[inline]
    pub const fn to_argb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0xFF, r, g, b])
    }
}

//
// Foreign trait impls
//

impl Debug for Color3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "Color3(#{r:02X}{g:02X}{b:02X})")
    }
}

impl From<[u8; 3]> for Color3 {
    #[inline]
    fn from(chs: [u8; 3]) -> Self {
        Self(chs)
    }
}

impl From<Color3> for [u8; 3] {
    #[inline]
    fn from(c: Color3) -> Self {
        c.0
    }
}

impl Index<usize> for Color3 {
    type Output = u8;

    #[inline]
    fn index(&self, i: usize) -> &u8 {
        &self.0[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels() {
        let c = rgb(1, 2, 3);
        assert_eq!([c.r(), c.g(), c.b()], [1, 2, 3]);
        assert_eq!(c[1], 2);
    }

    #[test]
    fn shade_scales_and_clamps() {
        let c = rgb(100, 200, 0);
        assert_eq!(c.shade(1.0), c);
        assert_eq!(c.shade(0.0), Color3::BLACK);
        assert_eq!(c.shade(0.25), rgb(25, 50, 0));
        assert_eq!(c.shade(1.5), rgb(150, 255, 0));
        assert_eq!(c.shade(f64::NAN), Color3::BLACK);
    }

    #[test]
    fn packed_u32() {
        let c = rgb(0x12, 0x34, 0x56);
        assert_eq!(c.to_rgb_u32(), 0x00_12_34_56);
        assert_eq!(c.to_argb_u32(), 0xFF_12_34_56);
    }

    #[test]
    fn debug() {
        assert_eq!(alloc::format!("{:?}", rgb(0xAB, 0, 0x10)), "Color3(#AB0010)");
    }
}
