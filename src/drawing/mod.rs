//! Rasterization onto an [`image::RgbaImage`].
//!
//! Two things are drawable: a [`Texture`], i.e. a shape filled with a solid color, and
//! [`Cells`], the Voronoi partition of the whole canvas. Both overwrite pixels; nothing
//! is blended, so drawing the same thing twice leaves the buffer unchanged.

use crate::voronoi::Seed;

mod impl_draw_rgbaimage;

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// A shape with a fill.
#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}

/// Every pixel colored after its nearest seed.
#[derive(Debug, Copy, Clone)]
pub struct Cells<'a> {
  pub seeds: &'a [Seed]
}

impl<'a> Cells<'a> {
  pub fn new(seeds: &'a [Seed]) -> Self {
    Self { seeds }
  }
}
