//! Seeds and the nearest-seed query.
//!
//! Distance from a pixel to a seed is the signed distance to the seed's circle boundary,
//! `|p - center| - r`. The query is a linear scan keeping a running minimum; a seed
//! only replaces the current best when it is *strictly* closer, so ties resolve to the
//! seed that comes first in the slice.

use {
  image::Rgba,
  num_traits::Float,
  crate::{
    geometry::{Circle, P2},
    sdf::SDF
  }
};

pub mod seeds;
pub use seeds::generate_seeds;

/// Generator of one Voronoi cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Seed {
  pub circle: Circle,
  pub color: Rgba<u8>
}

impl Seed {
  pub fn new(xy: P2, r: i32, color: Rgba<u8>) -> Self {
    Self { circle: Circle::new(xy, r), color }
  }
}

impl SDF<f64> for Seed {
  fn sdf(&self, pixel: P2) -> f64 { self.circle.sdf(pixel) } }

/// Index of a seed together with its distance to the queried pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistPoint<D> {
  pub distance: D,
  pub index: usize
}

impl<F: Float> Default for DistPoint<F> {
  fn default() -> Self {
    Self {
      distance: F::max_value(),
      index: 0
    }
  }
}

/// Closest seed by boundary distance, `None` for an empty slice.
pub fn nearest_seed_index<S>(pixel: P2, seeds: &[S]) -> Option<DistPoint<f64>>
  where S: SDF<f64> {
  if seeds.is_empty() {
    return None;
  }
  let mut nearest = DistPoint::default();
  for (index, seed) in seeds.iter().enumerate() {
    let distance = seed.sdf(pixel);
    if distance < nearest.distance {
      nearest = DistPoint { distance, index };
    }
  }
  Some(nearest)
}

pub fn nearest_seed(pixel: P2, seeds: &[Seed]) -> Option<&Seed> {
  nearest_seed_index(pixel, seeds)
    .map(|DistPoint { index, .. }| &seeds[index])
}
