//! How does this work
//!
//! ```text
//!    pix  = PixelBuffer::new(w, h, Format)
//!    mesh = Mesh::open("model.obj")       -- any MeshSource
//!  Raster Operations
//!    line(pix, p0, p1, color, LineMode)
//!      line_exact()  -- Bresenham, one pixel per step
//!      line_aa()     -- Wu, two blended pixels per step
//!    triangle(pix, a, b, c, color)
//!      barycentric() -- bounding box scan, clipped to pix
//!    set() / get()   -- out of range writes are ignored
//!  Render a Mesh
//!    render(mesh, config)
//!      project()          -- normalized [-1,1] to pixels
//!      triangle_outline() / triangle()
//!      flip_vertically()  -- origin at bottom left
//!  Output
//!    tga::encode()   -- raw or run-length chunks
//!    tga::decode()   -- header, payload, orientation fix-ups
//!    export::write_png()
//! ```

pub mod math;
pub mod color;
pub mod geometry;
pub mod buffer;
pub mod error;
pub mod tga;
pub mod line;
pub mod triangle;
pub mod mesh;
pub mod render;
pub mod export;

pub use color::*;
pub use geometry::*;
pub use buffer::*;
pub use error::*;
pub use line::*;
pub use triangle::*;
pub use mesh::*;
pub use render::*;
pub use export::*;

/// Access to the raw bytes of an image
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}
