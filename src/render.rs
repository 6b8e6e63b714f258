//! Rendering of meshes onto a pixel buffer
//!
//! ```text
//!    mesh  = Mesh::open(path)
//!    pix   = render(&mesh, &config)
//!      project()          -- normalized [-1,1] to canvas pixels
//!      triangle_outline() -- Wireframe
//!      triangle()         -- Filled
//!      flip_vertically()  -- origin_bottom_left
//!    render_to_file()    -- tga or png, by extension
//! ```

use std::path::Path;

use tracing::{debug, trace};

use crate::buffer::{Format, PixelBuffer};
use crate::color::Color;
use crate::error::RenderError;
use crate::export::write_png;
use crate::geometry::{Point2i, Vec3f};
use crate::line::LineMode;
use crate::mesh::MeshSource;
use crate::triangle::{is_degenerate, triangle, triangle_outline};

/// How faces are drawn
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum RenderMode {
    /// Edges of each face
    Wireframe,
    /// Solid faces, followed by edges if a stroke color is set
    Filled,
}

/// Settings for [render](fn.render.html)
#[derive(Debug,Clone,PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub format: Format,
    pub mode: RenderMode,
    pub line_mode: LineMode,
    /// Color of edges, no edges are drawn in `Filled` mode if `None`
    pub stroke: Option<Color>,
    /// Color of faces in `Filled` mode
    pub fill: Color,
    /// Background color
    pub background: Color,
    /// Run-length encode TGA output
    pub rle: bool,
    /// Place the origin at the bottom left of the image, y pointing up
    pub origin_bottom_left: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 800,
            height: 800,
            format: Format::Rgb,
            mode: RenderMode::Wireframe,
            line_mode: LineMode::Exact,
            stroke: Some(Color::white()),
            fill: Color::white(),
            background: Color::black(),
            rle: true,
            origin_bottom_left: true,
        }
    }
}

impl RenderConfig {
    pub fn new(width: usize, height: usize) -> Self {
        RenderConfig { width, height, .. Self::default() }
    }
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }
    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }
    pub fn line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }
    pub fn stroke(mut self, stroke: Option<Color>) -> Self {
        self.stroke = stroke;
        self
    }
    pub fn fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }
    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
    pub fn rle(mut self, rle: bool) -> Self {
        self.rle = rle;
        self
    }
    pub fn origin_bottom_left(mut self, flag: bool) -> Self {
        self.origin_bottom_left = flag;
        self
    }
}

/// Map a vertex in normalized coordinates to a canvas pixel
///
/// The projection is orthographic, z is ignored. Coordinates beyond the
/// range of `i32` saturate.
///
///     use tgaraster::{project, Vec3f, Point2i};
///
///     assert_eq!(project(Vec3f::new(-1.0, -1.0, 0.0), 100, 50), Point2i::new(0, 0));
///     assert_eq!(project(Vec3f::new( 0.0,  0.0, 0.0), 100, 50), Point2i::new(50, 25));
///
pub fn project(v: Vec3f, width: usize, height: usize) -> Point2i {
    let p = v.xy();
    let x = (p.x + 1.0) * width as f64 / 2.0;
    let y = (p.y + 1.0) * height as f64 / 2.0;
    Point2i::new(x as i32, y as i32)
}

/// Draw every face of `mesh` onto a new pixel buffer
pub fn render<M: MeshSource>(mesh: &M, config: &RenderConfig) -> PixelBuffer {
    let mut pix = PixelBuffer::new(config.width, config.height, config.format);
    pix.fill(config.background);

    let mut degenerate = 0;
    for i in 0 .. mesh.face_count() {
        let f = mesh.face(i);
        let pt = |k: usize| project(mesh.vertex(f[k]), config.width, config.height);
        let (a, b, c) = (pt(0), pt(1), pt(2));
        if config.mode == RenderMode::Filled {
            if is_degenerate(a, b, c) {
                degenerate += 1;
                trace!(face = i, "degenerate face");
            } else {
                triangle(&mut pix, a, b, c, config.fill);
            }
        }
        if let Some(stroke) = config.stroke {
            triangle_outline(&mut pix, a, b, c, stroke, config.line_mode);
        }
    }
    if config.origin_bottom_left {
        pix.flip_vertically();
    }
    debug!(faces = mesh.face_count(), degenerate, width = config.width,
           height = config.height, "rendered mesh");
    pix
}

/// Render `mesh` and write the image to `filename`
///
/// Files ending in `.png` are written as PNG, everything else as TGA
pub fn render_to_file<M: MeshSource, P: AsRef<Path>>(mesh: &M, config: &RenderConfig, filename: P) -> Result<PixelBuffer, RenderError> {
    let pix = render(mesh, config);
    let filename = filename.as_ref();
    let png = filename.extension()
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false);
    if png {
        write_png(&pix, filename)?;
    } else {
        pix.write_tga_file(filename, config.rle)?;
    }
    debug!(file = %filename.display(), png, "wrote render");
    Ok(pix)
}
