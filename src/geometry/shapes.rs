use {
  super::{BoundingBox, PixelSpace, Shape, P2},
  crate::sdf::SDF,
  euclid::Box2D
};

/// Circle with integer center and radius.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Circle {
  pub xy: P2,
  pub r: i32,
}

impl Circle {
  pub fn new(xy: P2, r: i32) -> Self {
    Self { xy, r }
  }
}

/// Saturates at the `i32` range; clipping to the canvas happens afterwards.
impl BoundingBox<i32, PixelSpace> for Circle {
  fn bounding_box(&self) -> Box2D<i32, PixelSpace> {
    let lo = |c: i32| c.saturating_sub(self.r);
    let hi = |c: i32| c.saturating_add(self.r).saturating_add(1);
    Box2D::new(
      P2::new(lo(self.xy.x), lo(self.xy.y)),
      P2::new(hi(self.xy.x), hi(self.xy.y))
    )}}

/// Euclidean distance to the center, minus radius.
impl SDF<f64> for Circle {
  fn sdf(&self, pixel: P2) -> f64 {
    (pixel.to_f64() - self.xy.to_f64()).length() - self.r as f64
  }
}

impl Shape for Circle {
  // exact in integers, no rounding at the boundary; i128 holds any squared i32 offset
  fn contains(&self, pixel: P2) -> bool {
    let dx = pixel.x as i128 - self.xy.x as i128;
    let dy = pixel.y as i128 - self.xy.y as i128;
    let r = self.r as i128;
    r >= 0 && dx * dx + dy * dy <= r * r
  }
}
