//! Pixel buffer

use crate::color::Color;
use crate::PixelData;

/// Channel layout of a pixel
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum Format {
    /// One byte per pixel
    Gray,
    /// Blue, Green, Red
    Rgb,
    /// Blue, Green, Red, Alpha
    Rgba,
}

impl Format {
    /// Bytes per pixel
    pub fn bpp(self) -> usize {
        match self {
            Format::Gray => 1,
            Format::Rgb  => 3,
            Format::Rgba => 4,
        }
    }
    /// Format from bytes per pixel, only 1, 3 and 4 are supported
    pub fn from_bpp(bpp: usize) -> Option<Format> {
        match bpp {
            1 => Some(Format::Gray),
            3 => Some(Format::Rgb),
            4 => Some(Format::Rgba),
            _ => None,
        }
    }
}

impl Default for Format {
    fn default() -> Format {
        Format::Rgb
    }
}

/// Pixel Buffer
///
/// Data is stored in row-major order (C-format) with the first row at the
/// top of the image. The length of the data is always
/// `width * height * bpp`.
///
/// `clone()` copies the pixel data, two buffers never share storage.
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
    format: Format,
}

impl PixelBuffer {
    /// Create a new buffer of `width` x `height` pixels
    ///
    /// All pixel data is zero
    ///
    /// # Panics
    ///
    /// Panics with a capacity overflow if `width * height * bpp` does not
    /// fit in a `usize`
    pub fn new(width: usize, height: usize, format: Format) -> Self {
        let n = byte_len(width, height, format).unwrap_or(usize::max_value());
        PixelBuffer {
            width, height, format,
            data: vec![0u8; n],
        }
    }
    /// Wrap existing pixel data
    ///
    /// Returns `None` if `data` is not `width * height * bpp` long
    pub fn from_raw(width: usize, height: usize, format: Format, data: Vec<u8>) -> Option<Self> {
        if byte_len(width, height, format) != Some(data.len()) {
            return None;
        }
        Some(PixelBuffer { width, height, format, data })
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Bytes per pixel
    pub fn bpp(&self) -> usize {
        self.format.bpp()
    }
    /// Pixel format
    pub fn format(&self) -> Format {
        self.format
    }
    /// Size of underlying data in bytes; width * height * bpp
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// True if the buffer has no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Raw pixel data
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    /// Bytes of row `y`
    pub fn row(&self, y: usize) -> &[u8] {
        debug_assert!(y < self.height);
        let n = self.width * self.bpp();
        &self.data[y * n .. (y+1) * n]
    }
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((x + y * self.width) * self.bpp())
    }
    /// Color of pixel at (`x`,`y`)
    ///
    /// Locations outside of the region return a zero color
    ///
    ///     use tgaraster::{PixelBuffer, Format, Color};
    ///
    ///     let mut pix = PixelBuffer::new(2, 2, Format::Rgb);
    ///     pix.set(1, 1, Color::rgb(255, 0, 0));
    ///     assert_eq!(pix.get(1, 1), Color::rgb(255, 0, 0));
    ///     assert_eq!(pix.get(0, 0), Color::rgb(0, 0, 0));
    ///     assert_eq!(pix.get(5, -1), Color::default());
    ///
    pub fn get(&self, x: i32, y: i32) -> Color {
        match self.offset(x, y) {
            Some(i) => Color::from_slice(&self.data[i .. i + self.bpp()]),
            None => Color::default(),
        }
    }
    /// Copies the [Color] `c` to pixel at (`x`,`y`)
    ///
    /// Only the first `bpp` bytes of the color are written; channels
    /// the color does not carry are written as zero. Locations outside
    /// of the region are ignored and `false` is returned.
    ///
    /// [Color]: ../color/struct.Color.html
    pub fn set(&mut self, x: i32, y: i32, c: Color) -> bool {
        let i = match self.offset(x, y) {
            Some(i) => i,
            None => return false,
        };
        let bpp = self.bpp();
        self.data[i .. i + bpp].copy_from_slice(c.with_bpp(bpp).raw());
        true
    }
    /// Set all pixel data to zero
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0);
    }
    /// Set every pixel to `c`
    pub fn fill(&mut self, c: Color) {
        let c = c.with_bpp(self.bpp());
        let bpp = self.bpp();
        for pix in self.data.chunks_exact_mut(bpp) {
            pix.copy_from_slice(c.raw());
        }
    }
    /// Reverse the order of the rows
    pub fn flip_vertically(&mut self) {
        let n = self.width * self.bpp();
        if n == 0 {
            return;
        }
        let half = self.height / 2;
        for j in 0 .. half {
            // Swap rows from the outside in
            let (top, bottom) = self.data.split_at_mut((self.height - 1 - j) * n);
            top[j * n .. (j+1) * n].swap_with_slice(&mut bottom[.. n]);
        }
    }
    /// Reverse the order of the pixels within each row
    pub fn flip_horizontally(&mut self) {
        let bpp = self.bpp();
        let n = self.width * bpp;
        if n == 0 {
            return;
        }
        let w = self.width;
        for row in self.data.chunks_exact_mut(n) {
            for i in 0 .. w / 2 {
                let (left, right) = row.split_at_mut((w - 1 - i) * bpp);
                left[i * bpp .. (i+1) * bpp].swap_with_slice(&mut right[.. bpp]);
            }
        }
    }
    /// Resample the buffer to `w` x `h` pixels
    ///
    /// Nearest sample scaling using an integer error accumulator on each
    /// axis, no interpolation is done. Scaling is lossy; scaling back to
    /// the original size does not restore the original data.
    ///
    /// Returns `false` and leaves the buffer unchanged if `w` or `h` is zero,
    /// the new size does not fit in memory, or the buffer is empty
    ///
    ///     use tgaraster::{PixelBuffer, Format, Color};
    ///
    ///     let mut pix = PixelBuffer::new(2, 1, Format::Gray);
    ///     pix.set(0, 0, Color::gray(10));
    ///     pix.set(1, 0, Color::gray(20));
    ///     assert!(pix.scale(4, 2));
    ///     assert_eq!(pix.row(0), &[10, 10, 20, 20]);
    ///     assert_eq!(pix.row(1), &[10, 10, 20, 20]);
    ///
    pub fn scale(&mut self, w: usize, h: usize) -> bool {
        if w == 0 || h == 0 || self.is_empty() {
            return false;
        }
        let n = match byte_len(w, h, self.format) {
            Some(n) => n,
            None => return false,
        };
        let bpp = self.bpp();
        let (width, height) = (self.width, self.height);
        let n_line = w * bpp;
        let o_line = width * bpp;
        let mut out = vec![0u8; n];

        let mut n_scan = 0;
        let mut y_err = 0;
        for j in 0 .. height {
            let o_scan = j * o_line;
            let mut x_err = 0;
            let mut nx = 0;
            for i in 0 .. width {
                x_err += w;
                while x_err >= width {
                    x_err -= width;
                    let dst = n_scan + nx * bpp;
                    let src = o_scan + i * bpp;
                    out[dst .. dst + bpp].copy_from_slice(&self.data[src .. src + bpp]);
                    nx += 1;
                }
            }
            y_err += h;
            while y_err >= height {
                if y_err >= height * 2 {
                    // Next destination row is skipped by the source, repeat this one
                    out.copy_within(n_scan .. n_scan + n_line, n_scan + n_line);
                }
                y_err -= height;
                n_scan += n_line;
            }
        }
        self.data = out;
        self.width = w;
        self.height = h;
        true
    }
}

/// Bytes needed for `width` x `height` pixels, `None` on overflow
fn byte_len(width: usize, height: usize, format: Format) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(format.bpp())
}

/// Access Pixeldata from a PixelBuffer
impl PixelData for PixelBuffer {
    fn pixeldata(&self) -> &[u8] {
        &self.data
    }
}
