//! Errors

use std::io;
use thiserror::Error;

/// Broad category of a [TgaError]
///
/// [TgaError]: enum.TgaError.html
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum ErrorKind {
    /// Bad header, unsupported depth or image type
    Format,
    /// Stream ended before the image was complete
    Truncated,
    /// Run-length stream produces more pixels than declared
    Overrun,
    /// Underlying reader or writer failed
    Io,
}

/// Errors reading or writing TGA images
#[derive(Debug, Error)]
pub enum TgaError {
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("image dimensions {width}x{height} exceed 65535")]
    DimensionsTooLarge { width: usize, height: usize },
    #[error("unsupported bits per pixel: {0}")]
    UnsupportedDepth(u8),
    #[error("unsupported image type code: {0}")]
    UnsupportedImageType(u8),
    #[error("unexpected end of data while reading {0}")]
    Truncated(&'static str),
    #[error("run-length data overruns the declared {declared} pixels")]
    Overrun { declared: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl TgaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TgaError::InvalidDimensions { .. }   |
            TgaError::DimensionsTooLarge { .. }  |
            TgaError::UnsupportedDepth(_)        |
            TgaError::UnsupportedImageType(_)    => ErrorKind::Format,
            TgaError::Truncated(_)               => ErrorKind::Truncated,
            TgaError::Overrun { .. }             => ErrorKind::Overrun,
            TgaError::Io(_)                      => ErrorKind::Io,
        }
    }
    /// Map a failed `read_exact` to a truncation of `what`
    pub(crate) fn read(e: io::Error, what: &'static str) -> TgaError {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            TgaError::Truncated(what)
        } else {
            TgaError::Io(e)
        }
    }
}

/// Errors loading a mesh
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error("line {line}: vertex index {index} out of range")]
    IndexOutOfRange { line: usize, index: i64 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors rendering a mesh to a file
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Tga(#[from] TgaError),
    #[error(transparent)]
    Mesh(#[from] MeshError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
