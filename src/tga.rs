//! Reading and writing of TGA (Truevision) image files
//!
//! Supported are uncompressed and run-length encoded images of gray
//! scale (8 bit), true color (24 bit) and true color with alpha (32 bit)
//! pixels. Color mapped images are not supported.
//!
//! Layout of a file written here:
//!
//! ```text
//!     18 byte header
//!     pixel data, raw or run-length encoded
//!     4 byte developer area offset (zero)
//!     4 byte extension area offset (zero)
//!     18 byte signature "TRUEVISION-XFILE.\0"
//! ```
//!
//! See <https://en.wikipedia.org/wiki/Truevision_TGA>

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::buffer::{Format, PixelBuffer};
use crate::error::TgaError;

/// Size of the file header in bytes
pub const HEADER_LEN: usize = 18;
/// Signature closing a TGA 2.0 file
pub const SIGNATURE: [u8; 18] = *b"TRUEVISION-XFILE.\0";
/// Longest run of a single run-length chunk
const MAX_CHUNK: usize = 128;

/// Image descriptor bit: first row is the top of the image
pub const ORIGIN_TOP: u8 = 0x20;
/// Image descriptor bit: first column is the right of the image
pub const ORIGIN_RIGHT: u8 = 0x10;

/// TGA file header
///
/// Multi-byte fields are little endian on disk
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Header {
    pub id_length: u8,
    pub color_map_type: u8,
    pub image_type: u8,
    pub color_map_origin: u16,
    pub color_map_length: u16,
    pub color_map_depth: u8,
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub image_descriptor: u8,
}

impl Header {
    pub fn from_bytes(b: &[u8; HEADER_LEN]) -> Self {
        let u16_at = |i: usize| u16::from_le_bytes([b[i], b[i+1]]);
        Header {
            id_length:        b[0],
            color_map_type:   b[1],
            image_type:       b[2],
            color_map_origin: u16_at(3),
            color_map_length: u16_at(5),
            color_map_depth:  b[7],
            x_origin:         u16_at(8),
            y_origin:         u16_at(10),
            width:            u16_at(12),
            height:           u16_at(14),
            bits_per_pixel:   b[16],
            image_descriptor: b[17],
        }
    }
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut b = [0u8; HEADER_LEN];
        b[0] = self.id_length;
        b[1] = self.color_map_type;
        b[2] = self.image_type;
        b[3..5].copy_from_slice(&self.color_map_origin.to_le_bytes());
        b[5..7].copy_from_slice(&self.color_map_length.to_le_bytes());
        b[7] = self.color_map_depth;
        b[8..10].copy_from_slice(&self.x_origin.to_le_bytes());
        b[10..12].copy_from_slice(&self.y_origin.to_le_bytes());
        b[12..14].copy_from_slice(&self.width.to_le_bytes());
        b[14..16].copy_from_slice(&self.height.to_le_bytes());
        b[16] = self.bits_per_pixel;
        b[17] = self.image_descriptor;
        b
    }
    /// Bytes of color map data following the image id
    fn color_map_bytes(&self) -> u64 {
        if self.color_map_type == 0 {
            return 0;
        }
        let entry = (u64::from(self.color_map_depth) + 7) / 8;
        u64::from(self.color_map_length) * entry
    }
}

/// Supported image type codes
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum ImageType {
    /// Uncompressed true color, code 2
    Color,
    /// Uncompressed gray scale, code 3
    Gray,
    /// Run-length encoded true color, code 10
    ColorRle,
    /// Run-length encoded gray scale, code 11
    GrayRle,
}

impl ImageType {
    pub fn code(self) -> u8 {
        match self {
            ImageType::Color    => 2,
            ImageType::Gray     => 3,
            ImageType::ColorRle => 10,
            ImageType::GrayRle  => 11,
        }
    }
    pub fn from_code(code: u8) -> Option<ImageType> {
        match code {
            2  => Some(ImageType::Color),
            3  => Some(ImageType::Gray),
            10 => Some(ImageType::ColorRle),
            11 => Some(ImageType::GrayRle),
            _  => None,
        }
    }
    pub fn is_rle(self) -> bool {
        match self {
            ImageType::ColorRle | ImageType::GrayRle => true,
            ImageType::Color | ImageType::Gray => false,
        }
    }
    /// Image type written for a pixel format
    pub fn for_format(format: Format, rle: bool) -> ImageType {
        match (format, rle) {
            (Format::Gray, false) => ImageType::Gray,
            (Format::Gray, true)  => ImageType::GrayRle,
            (_, false)            => ImageType::Color,
            (_, true)             => ImageType::ColorRle,
        }
    }
}

/// Skip `n` bytes of `r`
fn skip<R: Read>(r: &mut R, n: u64, what: &'static str) -> Result<(), TgaError> {
    if n == 0 {
        return Ok(());
    }
    let copied = io::copy(&mut r.by_ref().take(n), &mut io::sink())?;
    if copied != n {
        return Err(TgaError::Truncated(what));
    }
    Ok(())
}

/// Decode a TGA image from `r`
///
/// The returned buffer always has its first row at the top and its first
/// column on the left, whatever the origin stored in the file. On any error
/// no buffer is produced.
pub fn decode<R: Read>(r: &mut R) -> Result<PixelBuffer, TgaError> {
    let mut hbuf = [0u8; HEADER_LEN];
    r.read_exact(&mut hbuf).map_err(|e| TgaError::read(e, "header"))?;
    let header = Header::from_bytes(&hbuf);

    let (width, height) = (usize::from(header.width), usize::from(header.height));
    let format = Format::from_bpp(usize::from(header.bits_per_pixel / 8))
        .filter(|_| header.bits_per_pixel % 8 == 0)
        .ok_or(TgaError::UnsupportedDepth(header.bits_per_pixel))?;
    if width == 0 || height == 0 {
        return Err(TgaError::InvalidDimensions { width, height });
    }
    let image_type = ImageType::from_code(header.image_type)
        .ok_or(TgaError::UnsupportedImageType(header.image_type))?;
    debug!(width, height, bpp = format.bpp(), image_type = header.image_type,
           descriptor = header.image_descriptor, "read tga header");

    skip(r, u64::from(header.id_length), "image id")?;
    skip(r, header.color_map_bytes(), "color map")?;

    let data = if image_type.is_rle() {
        read_rle(r, width * height, format.bpp())?
    } else {
        read_raw(r, width * height * format.bpp())?
    };
    let mut buf = PixelBuffer::from_raw(width, height, format, data)
        .ok_or(TgaError::Truncated("pixel data"))?;

    if header.image_descriptor & ORIGIN_TOP == 0 {
        buf.flip_vertically();
    }
    if header.image_descriptor & ORIGIN_RIGHT != 0 {
        buf.flip_horizontally();
    }

    // Developer area, extension area and signature are not interpreted
    let mut rest = vec![];
    r.read_to_end(&mut rest)?;
    if rest.ends_with(&SIGNATURE) {
        debug!(trailer = rest.len(), "tga 2.0 signature found");
    } else {
        trace!(trailer = rest.len(), "no tga 2.0 signature");
    }
    Ok(buf)
}

/// Read `n` bytes of uncompressed pixel data
///
/// Memory grows with the data actually present, not with the size
/// declared in the header
fn read_raw<R: Read>(r: &mut R, n: usize) -> Result<Vec<u8>, TgaError> {
    let mut data = Vec::new();
    r.by_ref().take(n as u64).read_to_end(&mut data)?;
    if data.len() != n {
        return Err(TgaError::Truncated("pixel data"));
    }
    Ok(data)
}

/// Read run-length encoded data of `total` pixels of `bpp` bytes each
///
/// Each chunk starts with a control byte `c`:
///   - `c < 128`: `c + 1` literal pixels follow
///   - `c >= 128`: one pixel follows, repeated `c - 127` times
fn read_rle<R: Read>(r: &mut R, total: usize, bpp: usize) -> Result<Vec<u8>, TgaError> {
    let mut data = Vec::with_capacity(total.min(1 << 20) * bpp);
    let mut pix = [0u8; 4];
    let mut pixels = 0;
    let mut chunks = 0;
    while pixels < total {
        let mut ctl = [0u8; 1];
        r.read_exact(&mut ctl).map_err(|e| TgaError::read(e, "run-length control byte"))?;
        let ctl = usize::from(ctl[0]);
        let raw = ctl < 128;
        let n = if raw { ctl + 1 } else { ctl - 127 };
        if pixels + n > total {
            return Err(TgaError::Overrun { declared: total });
        }
        if raw {
            for _ in 0 .. n {
                r.read_exact(&mut pix[..bpp]).map_err(|e| TgaError::read(e, "run-length pixel"))?;
                data.extend_from_slice(&pix[..bpp]);
            }
        } else {
            r.read_exact(&mut pix[..bpp]).map_err(|e| TgaError::read(e, "run-length pixel"))?;
            for _ in 0 .. n {
                data.extend_from_slice(&pix[..bpp]);
            }
        }
        pixels += n;
        chunks += 1;
    }
    trace!(pixels, chunks, "read run-length data");
    Ok(data)
}

/// Encode `buf` as a TGA image into `w`
///
/// The image is written with a top-left origin. With `rle` the pixel
/// data is run-length encoded.
pub fn encode<W: Write>(buf: &PixelBuffer, w: &mut W, rle: bool) -> Result<(), TgaError> {
    let (width, height) = (buf.width(), buf.height());
    if width == 0 || height == 0 {
        return Err(TgaError::InvalidDimensions { width, height });
    }
    if width > usize::from(u16::max_value()) || height > usize::from(u16::max_value()) {
        return Err(TgaError::DimensionsTooLarge { width, height });
    }
    let image_type = ImageType::for_format(buf.format(), rle);
    let header = Header {
        image_type: image_type.code(),
        width: width as u16,
        height: height as u16,
        bits_per_pixel: (buf.bpp() * 8) as u8,
        image_descriptor: ORIGIN_TOP,
        .. Header::default()
    };
    w.write_all(&header.to_bytes())?;
    if rle {
        let chunks = write_rle(buf.data(), buf.bpp(), w)?;
        trace!(chunks, pixels = width * height, "wrote run-length data");
    } else {
        w.write_all(buf.data())?;
    }
    w.write_all(&[0u8; 4])?; // Developer area
    w.write_all(&[0u8; 4])?; // Extension area
    w.write_all(&SIGNATURE)?;
    debug!(width, height, bpp = buf.bpp(), image_type = image_type.code(), "wrote tga image");
    Ok(())
}

fn pixel(data: &[u8], bpp: usize, i: usize) -> &[u8] {
    &data[i * bpp .. (i + 1) * bpp]
}

/// Write `data` as run-length chunks, returns the number of chunks
///
/// Runs are found greedily: a repeat chunk while pixels equal the first,
/// otherwise a literal chunk that ends before the next pair of equal
/// pixels. Both are limited to 128 pixels.
fn write_rle<W: Write>(data: &[u8], bpp: usize, w: &mut W) -> io::Result<usize> {
    let n = data.len() / bpp;
    let mut p = 0;
    let mut chunks = 0;
    while p < n {
        let mut len = 1;
        if p + 1 < n && pixel(data, bpp, p) == pixel(data, bpp, p + 1) {
            while p + len < n && len < MAX_CHUNK && pixel(data, bpp, p + len) == pixel(data, bpp, p) {
                len += 1;
            }
            w.write_all(&[(len + 127) as u8])?;
            w.write_all(pixel(data, bpp, p))?;
        } else {
            while p + len < n && len < MAX_CHUNK {
                if p + len + 1 < n && pixel(data, bpp, p + len) == pixel(data, bpp, p + len + 1) {
                    break;
                }
                len += 1;
            }
            w.write_all(&[(len - 1) as u8])?;
            w.write_all(&data[p * bpp .. (p + len) * bpp])?;
        }
        p += len;
        chunks += 1;
    }
    Ok(chunks)
}

impl PixelBuffer {
    /// Read a TGA image from `filename`
    pub fn read_tga_file<P: AsRef<Path>>(filename: P) -> Result<PixelBuffer, TgaError> {
        let mut r = BufReader::new(File::open(filename)?);
        decode(&mut r)
    }
    /// Write the buffer as a TGA image to `filename`
    pub fn write_tga_file<P: AsRef<Path>>(&self, filename: P, rle: bool) -> Result<(), TgaError> {
        let mut w = BufWriter::new(File::create(filename)?);
        encode(self, &mut w, rle)?;
        w.flush()?;
        Ok(())
    }
    /// Decode a TGA image held in memory
    pub fn from_tga_bytes(mut bytes: &[u8]) -> Result<PixelBuffer, TgaError> {
        decode(&mut bytes)
    }
    /// Encode the buffer as a TGA image in memory
    pub fn to_tga_bytes(&self, rle: bool) -> Result<Vec<u8>, TgaError> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.len() + 26);
        encode(self, &mut out, rle)?;
        Ok(out)
    }
}
