//! .
//!
//! The origin of the coordinate system is the top-left pixel. Coordinates are integer
//! pixel indices; the canvas covers `[0, width) x [0, height)`.

use {
  euclid::{Point2D, Box2D, Size2D},
  crate::sdf::SDF
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSpace;

pub type P2 = Point2D<i32, PixelSpace>;

pub trait BoundingBox<T, S> {
  /// Half-open box `[min, max)` covering every point of the shape.
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f64> + BoundingBox<i32, PixelSpace> {
  /// Closed membership test; the boundary belongs to the shape.
  fn contains(&self, pixel: P2) -> bool;
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}

/// Intersection of a bounding box with the canvas, in unsigned pixel indices.
/// `None` when the box lies entirely off-canvas.
pub fn clip_to_canvas(
  bounding_box: Box2D<i32, PixelSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  let canvas = Box2D::from_size(resolution.to_i32());
  bounding_box
    .intersection(&canvas)
    .map(|x| x.to_u32())
}
