//! Fixed point and fractional helpers

/// Interpolate a value between two end points using fixed point math
///
/// `a` is the weight of `q`; `a == 0` returns `p` and `a == 255` returns `q`
///
///     use tgaraster::math::lerp_u8;
///
///     assert_eq!(lerp_u8(0, 255, 0),   0);
///     assert_eq!(lerp_u8(0, 255, 255), 255);
///     assert_eq!(lerp_u8(0, 255, 128), 128);
///
pub fn lerp_u8(p: u8, q: u8, a: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let v = if p > q { 1 } else { 0 };
    let (q,p,a) = (i32::from(q), i32::from(p), i32::from(a));
    let t0 : i32 = (q - p) * a + base_msb - v; // Signed multiplication
    let t1 : i32 = ((t0 >> base_shift) + t0) >> base_shift;
    (p + t1) as u8
}

/// Multiply two u8 values using fixed point math, 255 acts as 1.0
pub fn multiply_u8(a: u8, b: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let (a,b) = (u32::from(a), u32::from(b));
    let t : u32  = a * b + base_msb;
    let tt : u32 = ((t >> base_shift) + t) >> base_shift;
    tt as u8
}

/// Convert a coverage in [0,1] to a u8 weight in [0,255]
pub fn cover_u8(v: f64) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}

/// Fractional part of an f64 number
pub fn fpart(x: f64) -> f64 {
    x - x.floor()
}
/// 1.0 - fractional part of an f64 number
pub fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}
/// Integral part of an f64 number
pub fn ipart(x: f64) -> f64 {
    x.floor()
}
