//! Points and Vectors

use std::ops::{Mul, Sub};

/// Integer point on the canvas
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Point2i {
    pub x: i32,
    pub y: i32,
}

impl Point2i {
    pub fn new(x: i32, y: i32) -> Self {
        Point2i { x, y }
    }
}

impl From<(i32,i32)> for Point2i {
    fn from(p: (i32,i32)) -> Self {
        Point2i::new(p.0, p.1)
    }
}

/// Two dimensional vector
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vec2f {
    pub x: f64,
    pub y: f64,
}

impl Vec2f {
    pub fn new(x: f64, y: f64) -> Self {
        Vec2f { x, y }
    }
}

/// Three dimensional vector
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vec3f {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3f {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3f { x, y, z }
    }
    pub fn dot(&self, o: &Vec3f) -> f64 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }
    pub fn cross(&self, o: &Vec3f) -> Vec3f {
        Vec3f::new(self.y * o.z - self.z * o.y,
                   self.z * o.x - self.x * o.z,
                   self.x * o.y - self.y * o.x)
    }
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }
    /// Unit length vector, or the vector itself if its length is zero
    pub fn normalize(&self) -> Vec3f {
        let n = self.norm();
        if n == 0.0 {
            *self
        } else {
            *self * (1.0 / n)
        }
    }
    /// Drop the z component
    pub fn xy(&self) -> Vec2f {
        Vec2f::new(self.x, self.y)
    }
}

impl Sub for Vec3f {
    type Output = Vec3f;
    fn sub(self, o: Vec3f) -> Vec3f {
        Vec3f::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}
impl Mul<f64> for Vec3f {
    type Output = Vec3f;
    fn mul(self, s: f64) -> Vec3f {
        Vec3f::new(self.x * s, self.y * s, self.z * s)
    }
}

/// Integer form of the barycentric cross product
///
/// Returns `(u, v, d)` where the weights of `a`, `b` and `c` are
/// `(d - u - v) / d`, `u / d` and `v / d`. `d` is twice the signed
/// area of the triangle and is zero for collinear vertices.
///
/// Differences of i32 coordinates need 33 bits and their products 66,
/// so the arithmetic is done in i128.
pub(crate) fn barycentric_i128(a: Point2i, b: Point2i, c: Point2i, p: Point2i) -> (i128, i128, i128) {
    let (ax, ay) = (i128::from(a.x), i128::from(a.y));
    let (bx, by) = (i128::from(b.x), i128::from(b.y));
    let (cx, cy) = (i128::from(c.x), i128::from(c.y));
    let (px, py) = (i128::from(p.x), i128::from(p.y));
    // cross( (c-a).x, (b-a).x, a.x-p.x ) x ( (c-a).y, (b-a).y, a.y-p.y )
    let (x0, x1, x2) = (cx - ax, bx - ax, ax - px);
    let (y0, y1, y2) = (cy - ay, by - ay, ay - py);
    let ux = x1 * y2 - x2 * y1;
    let uy = x2 * y0 - x0 * y2;
    let uz = x0 * y1 - x1 * y0;
    // ux weights c, uy weights b
    (uy, ux, uz)
}

/// Barycentric coordinates of `p` with respect to triangle `a`, `b`, `c`
///
/// Returns `None` if the triangle is degenerate (collinear vertices)
///
///     use tgaraster::{Point2i, barycentric};
///
///     let (a,b,c) = (Point2i::new(0,0), Point2i::new(4,0), Point2i::new(0,4));
///     let w = barycentric(a, b, c, Point2i::new(0,0)).unwrap();
///     assert_eq!((w.x, w.y, w.z), (1.0, 0.0, 0.0));
///     assert!(barycentric(a, a, c, Point2i::new(1,1)).is_none());
///
pub fn barycentric(a: Point2i, b: Point2i, c: Point2i, p: Point2i) -> Option<Vec3f> {
    let (u, v, d) = barycentric_i128(a, b, c, p);
    if d == 0 {
        return None;
    }
    let d = d as f64;
    let (u, v) = (u as f64 / d, v as f64 / d);
    Some(Vec3f::new(1.0 - (u + v), u, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn cross_product() {
        let x = Vec3f::new(1.,0.,0.);
        let y = Vec3f::new(0.,1.,0.);
        assert_eq!(x.cross(&y), Vec3f::new(0.,0.,1.));
        assert_eq!(y.cross(&x), Vec3f::new(0.,0.,-1.));
        assert_eq!(Vec3f::new(3.,4.,0.).norm(), 5.0);
        assert_eq!(Vec3f::new(0.,0.,2.).normalize(), Vec3f::new(0.,0.,1.));
        assert_eq!(Vec3f::default().normalize(), Vec3f::default());
        assert_eq!(y - x, Vec3f::new(-1.,1.,0.));
    }
    #[test]
    fn barycentric_weights() {
        let (a,b,c) = (Point2i::new(0,0), Point2i::new(4,0), Point2i::new(0,4));
        let w = barycentric(a,b,c, Point2i::new(4,0)).unwrap();
        assert_eq!((w.x,w.y,w.z), (0.0,1.0,0.0));
        let w = barycentric(a,b,c, Point2i::new(0,4)).unwrap();
        assert_eq!((w.x,w.y,w.z), (0.0,0.0,1.0));
        let w = barycentric(a,b,c, Point2i::new(1,3)).unwrap();
        assert_eq!((w.x,w.y,w.z), (0.0,0.25,0.75));
        let w = barycentric(a,b,c, Point2i::new(2,3)).unwrap();
        assert!(w.x < 0.0);
        // Winding does not matter
        let w = barycentric(a,c,b, Point2i::new(1,1)).unwrap();
        assert_eq!((w.x,w.y,w.z), (0.5,0.25,0.25));
    }
    #[test]
    fn degenerate() {
        let (a,b,c) = (Point2i::new(0,0), Point2i::new(2,2), Point2i::new(4,4));
        assert!(barycentric(a,b,c, Point2i::new(1,1)).is_none());
    }
    #[test]
    fn extreme_coordinates() {
        let (min, max) = (i32::min_value(), i32::max_value());
        let (a,b,c) = (Point2i::new(min,min), Point2i::new(max,min), Point2i::new(min,max));
        let w = barycentric(a,b,c, Point2i::new(min,min)).unwrap();
        assert_eq!((w.x,w.y,w.z), (1.0,0.0,0.0));
        let (_, _, d) = barycentric_i128(a,b,c, a);
        let side = (1i128 << 32) - 1;
        assert_eq!(d, -side * side);
    }
}
