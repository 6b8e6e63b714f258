//! Colors

use crate::math::{lerp_u8, multiply_u8};

/// Color as up to four channel bytes and a channel count
///
/// Bytes are kept in the order they are stored in a [PixelBuffer]:
/// Blue, Green, Red, Alpha for color buffers and a single value for
/// gray scale. Channels beyond `bpp` are always zero.
///
///     use tgaraster::Color;
///
///     let red = Color::rgb(255, 0, 0);
///     assert_eq!(red.bpp(), 3);
///     assert_eq!(red.raw(), &[0, 0, 255]);
///     assert_eq!(red.red(), 255);
///
/// [PixelBuffer]: ../buffer/struct.PixelBuffer.html
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Color {
    raw: [u8; 4],
    bpp: usize,
}

impl Color {
    /// Create a new color with Red, Green, Blue and Alpha components
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { raw: [b, g, r, a], bpp: 4 }
    }
    /// Create a new color with Red, Green and Blue components
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { raw: [b, g, r, 0], bpp: 3 }
    }
    /// Create a new gray scale value
    pub fn gray(v: u8) -> Self {
        Color { raw: [v, 0, 0, 0], bpp: 1 }
    }
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::rgba(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::rgba(0,0,0,255)
    }
    /// Create a color from the first `min(p.len(), 4)` bytes of `p`
    ///
    /// Bytes are taken as stored, i.e. Blue, Green, Red, Alpha
    pub fn from_slice(p: &[u8]) -> Self {
        let bpp = p.len().min(4);
        let mut raw = [0u8; 4];
        raw[..bpp].copy_from_slice(&p[..bpp]);
        Color { raw, bpp }
    }
    /// Number of meaningful channel bytes
    pub fn bpp(&self) -> usize {
        self.bpp
    }
    /// Channel bytes as stored, `bpp` long
    pub fn raw(&self) -> &[u8] {
        &self.raw[..self.bpp]
    }
    /// Channel bytes padded with zeros, or truncated, to `bpp`
    ///
    ///     use tgaraster::Color;
    ///
    ///     let c = Color::rgb(1,2,3).with_bpp(4);
    ///     assert_eq!(c.raw(), &[3,2,1,0]);
    ///
    pub fn with_bpp(&self, bpp: usize) -> Self {
        let bpp = bpp.min(4);
        let mut raw = [0u8; 4];
        raw[..bpp].copy_from_slice(&self.raw[..bpp]);
        Color { raw, bpp }
    }
    /// Red component, the gray value for gray scale
    pub fn red(&self) -> u8 {
        match self.bpp { 1 => self.raw[0], _ => self.raw[2] }
    }
    /// Green component, the gray value for gray scale
    pub fn green(&self) -> u8 {
        match self.bpp { 1 => self.raw[0], _ => self.raw[1] }
    }
    /// Blue component
    pub fn blue(&self) -> u8 {
        self.raw[0]
    }
    /// Alpha component, opaque when the color carries no alpha channel
    pub fn alpha(&self) -> u8 {
        match self.bpp { 4 => self.raw[3], _ => 255 }
    }

    /// Mix `self` over the background `bg` with a coverage `cover`
    ///
    /// The coverage is scaled by the alpha of `self`, then each of the
    /// `bg.bpp()` channels is interpolated with fixed point math. For an
    /// opaque color `cover == 0` returns `bg` and `cover == 255` returns `self`
    ///
    ///     use tgaraster::Color;
    ///
    ///     let bg = Color::rgb(0,0,0);
    ///     let fg = Color::rgb(255,255,255);
    ///     assert_eq!(fg.blend(&bg, 0), bg);
    ///     assert_eq!(fg.blend(&bg, 255), fg);
    ///     assert_eq!(fg.blend(&bg, 128), Color::rgb(128,128,128));
    ///
    pub fn blend(&self, bg: &Color, cover: u8) -> Color {
        let cover = multiply_u8(cover, self.alpha());
        let mut raw = [0u8; 4];
        for (i, v) in raw.iter_mut().enumerate().take(bg.bpp) {
            *v = lerp_u8(bg.raw[i], self.raw[i], cover);
        }
        Color { raw, bpp: bg.bpp }
    }
}

impl From<[u8; 4]> for Color {
    /// Create from Red, Green, Blue and Alpha
    fn from(c: [u8; 4]) -> Color {
        Color::rgba(c[0], c[1], c[2], c[3])
    }
}
impl From<[u8; 3]> for Color {
    /// Create from Red, Green and Blue
    fn from(c: [u8; 3]) -> Color {
        Color::rgb(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    #[test]
    fn channel_order() {
        let c = Color::rgba(10,20,30,40);
        assert_eq!(c.raw(), &[30,20,10,40]);
        assert_eq!((c.red(),c.green(),c.blue(),c.alpha()), (10,20,30,40));

        let g = Color::gray(77);
        assert_eq!(g.raw(), &[77]);
        assert_eq!((g.red(),g.green(),g.blue(),g.alpha()), (77,77,77,255));

        assert_eq!(Color::from_slice(&[1,2,3]), Color::rgb(3,2,1));
        assert_eq!(Color::from_slice(&[1,2,3,4,5]).bpp(), 4);
        assert_eq!(Color::from([1,2,3]), Color::rgb(1,2,3));
        assert_eq!(Color::default().bpp(), 0);
    }
    #[test]
    fn narrowing() {
        let c = Color::rgba(1,2,3,4);
        assert_eq!(c.with_bpp(3), Color::rgb(1,2,3));
        assert_eq!(c.with_bpp(1), Color::gray(3));
    }
    #[test]
    fn blend_uses_background_depth() {
        let bg = Color::gray(0);
        let fg = Color::rgba(255,255,255,255);
        let out = fg.blend(&bg, 255);
        assert_eq!(out.bpp(), 1);
        assert_eq!(out, Color::gray(255));
    }
    #[test]
    fn blend_scales_by_alpha() {
        let bg = Color::rgba(0,0,0,255);
        let half = Color::rgba(255,255,255,128);
        let out = half.blend(&bg, 255);
        assert_eq!((out.red(),out.green(),out.blue()), (128,128,128));
        let out = half.blend(&bg, 0);
        assert_eq!(out, bg);
        let out = Color::rgb(200,100,50).blend(&Color::rgb(0,0,0), 255);
        assert_eq!(out, Color::rgb(200,100,50));
    }
}
