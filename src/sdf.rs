use crate::geometry::P2;

/// Signed distance function: negative inside, zero on the boundary, positive outside.
pub trait SDF<T> {
  fn sdf(&self, pixel: P2) -> T;
}
