//! Line drawing
//!
//! Both strategies walk the dominant axis one pixel at a time. Steep lines
//! are drawn with x and y exchanged and endpoints are ordered so that the
//! walk always moves toward increasing x.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::geometry::Point2i;
use crate::math::{cover_u8, fpart, ipart, rfpart};

/// Line drawing strategy
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum LineMode {
    /// One pixel per step, integer error accumulation (Bresenham)
    Exact,
    /// Two coverage weighted pixels per step (Xiaolin Wu)
    AntiAliased,
}

impl Default for LineMode {
    fn default() -> LineMode {
        LineMode::Exact
    }
}

/// Draw a line from `p0` to `p1`, endpoints inclusive, with color `c`
///
/// Pixels outside of `buf` are ignored
///
///     use tgaraster::{PixelBuffer, Format, Color, Point2i, LineMode, line};
///
///     let mut pix = PixelBuffer::new(8, 8, Format::Gray);
///     line(&mut pix, Point2i::new(0,0), Point2i::new(7,7), Color::gray(255), LineMode::Exact);
///     assert_eq!(pix.get(3,3), Color::gray(255));
///     assert_eq!(pix.get(3,4), Color::gray(0));
///
pub fn line(buf: &mut PixelBuffer, p0: Point2i, p1: Point2i, c: Color, mode: LineMode) {
    match mode {
        LineMode::Exact       => line_exact(buf, p0, p1, c),
        LineMode::AntiAliased => line_aa(buf, p0, p1, c),
    }
}

/// Endpoints as (x0, y0, x1, y1, steep) with x0 <= x1 along the dominant axis
fn orient(p0: Point2i, p1: Point2i) -> (i64, i64, i64, i64, bool) {
    let (x0, y0) = (i64::from(p0.x), i64::from(p0.y));
    let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
    let steep = (x1 - x0).abs() < (y1 - y0).abs();
    let (x0,y0,x1,y1) = if steep   { (y0,x0,y1,x1) } else { (x0,y0,x1,y1) };
    let (x0,y0,x1,y1) = if x0 > x1 { (x1,y1,x0,y0) } else { (x0,y0,x1,y1) };
    (x0, y0, x1, y1, steep)
}

/// Canvas location of walk position (x,y)
fn canvas(x: i64, y: i64, steep: bool) -> Option<(i32, i32)> {
    let (x, y) = if steep { (y, x) } else { (x, y) };
    if x < i64::from(i32::min_value()) || x > i64::from(i32::max_value()) ||
       y < i64::from(i32::min_value()) || y > i64::from(i32::max_value()) {
        return None;
    }
    Some((x as i32, y as i32))
}

/// Steps of the dominant axis that can land on `buf`
fn visible(buf: &PixelBuffer, x0: i64, x1: i64, steep: bool) -> Option<(i64, i64)> {
    let extent = if steep { buf.height() } else { buf.width() };
    let (lo, hi) = (x0.max(0), x1.min(extent as i64 - 1));
    if lo > hi {
        return None;
    }
    Some((lo, hi))
}

/// Draw a line using [Bresenham's line drawing algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
///
/// Sets exactly `max(|dx|,|dy|) + 1` pixels when the line is inside `buf`
pub fn line_exact(buf: &mut PixelBuffer, p0: Point2i, p1: Point2i, c: Color) {
    let (x0, y0, x1, y1, steep) = orient(p0, p1);
    let (start, end) = match visible(buf, x0, x1, steep) {
        Some(r) => r,
        None => return,
    };
    let dx = x1 - x0;
    let derror = (y1 - y0).abs() * 2;
    let ystep = if y1 > y0 { 1 } else { -1 };
    // Error and y after the steps before `start`; the error stays in (-dx, dx]
    let (mut y, mut error) = if start > x0 {
        let e = i128::from(start - x0) * i128::from(derror);
        let d = i128::from(dx);
        let m = (e + d - 1) / (2 * d);
        (y0 + ystep * m as i64, (e - 2 * d * m) as i64)
    } else {
        (y0, 0)
    };
    for x in start ..= end {
        if let Some((px, py)) = canvas(x, y, steep) {
            buf.set(px, py, c);
        }
        error += derror;
        if error > dx {
            y += ystep;
            error -= dx * 2;
        }
    }
}

/// Draw a line using [Xiaolin Wu's line drawing algorithm](https://en.wikipedia.org/wiki/Xiaolin_Wu%27s_line_algorithm)
///
/// For each step along the dominant axis the two pixels straddling the
/// exact line position are blended with `c`, weighted by their distance
/// from the line
pub fn line_aa(buf: &mut PixelBuffer, p0: Point2i, p1: Point2i, c: Color) {
    let (x0, y0, x1, y1, steep) = orient(p0, p1);
    let dx = (x1 - x0) as f64;
    let dy = (y1 - y0) as f64;
    let gradient = if dx == 0.0 { 0.0 } else { dy / dx };
    let (start, end) = match visible(buf, x0, x1, steep) {
        Some(r) => r,
        None => return,
    };

    let mut intery = y0 as f64 + gradient * (start - x0) as f64;
    for x in start ..= end {
        let y = ipart(intery) as i64;
        blend_pixel(buf, x, y,     steep, c, cover_u8(rfpart(intery)));
        blend_pixel(buf, x, y + 1, steep, c, cover_u8(fpart(intery)));
        intery += gradient;
    }
}

fn blend_pixel(buf: &mut PixelBuffer, x: i64, y: i64, steep: bool, c: Color, cover: u8) {
    if cover == 0 {
        return;
    }
    if let Some((px, py)) = canvas(x, y, steep) {
        let bg = buf.get(px, py);
        if bg.bpp() == 0 {
            return; // Outside
        }
        buf.set(px, py, c.blend(&bg, cover));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Format;

    fn lit(p: &PixelBuffer) -> Vec<(i32,i32)> {
        let mut out = vec![];
        for y in 0 .. p.height() as i32 {
            for x in 0 .. p.width() as i32 {
                if p.get(x,y) != Color::gray(0) {
                    out.push((x,y));
                }
            }
        }
        out
    }

    #[test]
    fn horizontal() {
        let mut p = PixelBuffer::new(10, 10, Format::Gray);
        line_exact(&mut p, Point2i::new(0,0), Point2i::new(5,0), Color::gray(255));
        assert_eq!(lit(&p), vec![(0,0),(1,0),(2,0),(3,0),(4,0),(5,0)]);
    }

    #[test]
    fn steep() {
        let mut p = PixelBuffer::new(10, 10, Format::Gray);
        line_exact(&mut p, Point2i::new(0,0), Point2i::new(3,6), Color::gray(255));
        let px = lit(&p);
        assert_eq!(px.len(), 7);
        for (i, &(x,y)) in px.iter().enumerate() {
            assert_eq!(y, i as i32);
            assert!(x >= 0 && x <= 3);
        }
        assert_eq!(px[0], (0,0));
        assert_eq!(px[6], (3,6));
    }

    #[test]
    fn direction_does_not_matter() {
        let ends = [((1,8),(9,2)), ((0,0),(2,9)), ((9,9),(0,3)), ((4,4),(4,4)), ((2,7),(8,7))];
        for &(a,b) in ends.iter() {
            let (a, b) = (Point2i::from(a), Point2i::from(b));
            let mut p = PixelBuffer::new(10, 10, Format::Gray);
            let mut q = PixelBuffer::new(10, 10, Format::Gray);
            line_exact(&mut p, a, b, Color::gray(255));
            line_exact(&mut q, b, a, Color::gray(255));
            let n = (b.x - a.x).abs().max((b.y - a.y).abs()) + 1;
            assert_eq!(lit(&p).len(), n as usize);
            assert_eq!(lit(&q).len(), n as usize);
            assert_eq!(p.get(a.x, a.y), Color::gray(255));
            assert_eq!(p.get(b.x, b.y), Color::gray(255));
        }
    }

    #[test]
    fn clipped() {
        let mut p = PixelBuffer::new(4, 4, Format::Gray);
        line_exact(&mut p, Point2i::new(-3,1), Point2i::new(8,1), Color::gray(255));
        assert_eq!(lit(&p), vec![(0,1),(1,1),(2,1),(3,1)]);
        line_aa(&mut p, Point2i::new(-10,-10), Point2i::new(-2,-5), Color::gray(255));
        assert_eq!(lit(&p).len(), 4);
    }

    #[test]
    fn clipped_matches_unclipped() {
        let ends = [((-7,-3),(15,8)), ((3,-12),(6,20)), ((12,-4),(-9,11)), ((-5,5),(-1,12))];
        for &(a,b) in ends.iter() {
            let (a, b) = (Point2i::from(a), Point2i::from(b));
            let off = |p: Point2i| Point2i::new(p.x + 20, p.y + 20);
            for &mode in [LineMode::Exact, LineMode::AntiAliased].iter() {
                let mut small = PixelBuffer::new(10, 10, Format::Gray);
                let mut big = PixelBuffer::new(50, 50, Format::Gray);
                line(&mut small, a, b, Color::gray(255), mode);
                line(&mut big, off(a), off(b), Color::gray(255), mode);
                for y in 0 .. 10 {
                    for x in 0 .. 10 {
                        assert_eq!(small.get(x,y), big.get(x+20,y+20), "{:?} {:?} {:?} ({},{})", a, b, mode, x, y);
                    }
                }
            }
        }
    }

    #[test]
    fn far_endpoints() {
        let (min, max) = (i32::min_value(), i32::max_value());
        for &mode in [LineMode::Exact, LineMode::AntiAliased].iter() {
            let mut p = PixelBuffer::new(8, 8, Format::Gray);
            line(&mut p, Point2i::new(-2_000_000_000, 3), Point2i::new(2_000_000_000, 3), Color::gray(255), mode);
            assert_eq!(lit(&p), (0 .. 8).map(|x| (x,3)).collect::<Vec<_>>());

            let mut p = PixelBuffer::new(8, 8, Format::Gray);
            line(&mut p, Point2i::new(min,min), Point2i::new(max,max), Color::gray(255), mode);
            assert_eq!(lit(&p), (0 .. 8).map(|i| (i,i)).collect::<Vec<_>>());
        }
    }

    #[test]
    fn anti_aliased_coverage() {
        let mut p = PixelBuffer::new(6, 4, Format::Gray);
        line_aa(&mut p, Point2i::new(0,0), Point2i::new(4,2), Color::gray(255));
        assert_eq!(p.get(0,0), Color::gray(255));
        assert_eq!(p.get(0,1), Color::gray(0));
        assert_eq!(p.get(1,0), Color::gray(128));
        assert_eq!(p.get(1,1), Color::gray(128));
        assert_eq!(p.get(2,1), Color::gray(255));
        assert_eq!(p.get(3,1), Color::gray(128));
        assert_eq!(p.get(3,2), Color::gray(128));
        assert_eq!(p.get(4,2), Color::gray(255));
        assert_eq!(lit(&p).len(), 7);
    }

    #[test]
    fn anti_aliased_axis_aligned_is_exact() {
        let mut p = PixelBuffer::new(8, 8, Format::Rgb);
        let mut q = PixelBuffer::new(8, 8, Format::Rgb);
        let red = Color::rgb(255, 0, 0);
        line(&mut p, Point2i::new(1,6), Point2i::new(1,0), red, LineMode::AntiAliased);
        line(&mut q, Point2i::new(1,6), Point2i::new(1,0), red, LineMode::Exact);
        assert_eq!(p, q);
    }
}
