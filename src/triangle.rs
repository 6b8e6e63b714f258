//! Triangle filling

use std::cmp::{max, min};

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::geometry::{barycentric_i128, Point2i};
use crate::line::{line, LineMode};

/// True if the weight `w` has the same sign as the denominator `d` or is zero
fn non_negative(w: i128, d: i128) -> bool {
    w == 0 || (w > 0) == (d > 0)
}

/// True if `a`, `b` and `c` are collinear
pub fn is_degenerate(a: Point2i, b: Point2i, c: Point2i) -> bool {
    barycentric_i128(a, b, c, a).2 == 0
}

/// Fill the triangle `a`, `b`, `c` with `color`
///
/// Every pixel in the bounding box of the triangle, clipped to `buf`, is
/// tested with its barycentric coordinates; pixels inside or on an edge
/// are set. The vertex order does not matter. Degenerate triangles are
/// not drawn.
///
/// Returns the number of pixels set
///
///     use tgaraster::{PixelBuffer, Format, Color, Point2i, triangle};
///
///     let mut pix = PixelBuffer::new(10, 10, Format::Gray);
///     let n = triangle(&mut pix, Point2i::new(0,0), Point2i::new(4,0), Point2i::new(0,4), Color::gray(1));
///     assert_eq!(n, 15);
///
pub fn triangle(buf: &mut PixelBuffer, a: Point2i, b: Point2i, c: Point2i, color: Color) -> usize {
    if buf.is_empty() || is_degenerate(a, b, c) {
        return 0;
    }
    let xmax = buf.width().min(i32::max_value() as usize) as i32 - 1;
    let ymax = buf.height().min(i32::max_value() as usize) as i32 - 1;
    let x0 = max(0,    min(a.x, min(b.x, c.x)));
    let x1 = min(xmax, max(a.x, max(b.x, c.x)));
    let y0 = max(0,    min(a.y, min(b.y, c.y)));
    let y1 = min(ymax, max(a.y, max(b.y, c.y)));

    let mut n = 0;
    for y in y0 ..= y1 {
        for x in x0 ..= x1 {
            let (u, v, d) = barycentric_i128(a, b, c, Point2i::new(x, y));
            if non_negative(d - u - v, d) && non_negative(u, d) && non_negative(v, d)
                && buf.set(x, y, color) {
                n += 1;
            }
        }
    }
    n
}

/// Draw the three edges of triangle `a`, `b`, `c`
pub fn triangle_outline(buf: &mut PixelBuffer, a: Point2i, b: Point2i, c: Point2i,
                        color: Color, mode: LineMode) {
    line(buf, a, b, color, mode);
    line(buf, b, c, color, mode);
    line(buf, c, a, color, mode);
}
