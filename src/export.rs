//! Writing of PNG files and comparison of images
//!
//! Pixel buffers keep color channels in Blue, Green, Red order; these are
//! swapped to Red, Green, Blue for the `image` crate.

use std::path::Path;

use crate::buffer::{Format, PixelBuffer};

/// Pixel data in Red, Green, Blue (Alpha) order
fn rgb_order(buf: &PixelBuffer) -> Vec<u8> {
    let mut data = buf.data().to_vec();
    if buf.format() != Format::Gray {
        for pix in data.chunks_exact_mut(buf.bpp()) {
            pix.swap(0, 2);
        }
    }
    data
}

/// Write `buf` as a PNG image to `filename`
pub fn write_png<P: AsRef<Path>>(buf: &PixelBuffer, filename: P) -> Result<(), std::io::Error> {
    let color = match buf.format() {
        Format::Gray => image::Gray(8),
        Format::Rgb  => image::RGB(8),
        Format::Rgba => image::RGBA(8),
    };
    image::save_buffer(filename, &rgb_order(buf), buf.width() as u32, buf.height() as u32, color)
}

/// Read any image supported by the `image` crate as Red, Green, Blue, Alpha
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize),image::ImageError> {
    let img = image::open(filename)?.to_rgba();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}

/// Compare two image files pixel by pixel
///
/// Differences are printed to stdout
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool,image::ImageError> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            println!("{} [{},{},{}]: {} {}", i, (i/4)%w1,(i/4)/w1,i%4, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
