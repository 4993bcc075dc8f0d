//! Render configuration.
//!
//! [`Config::default`] carries the stock constants: an 800x600 canvas, 20 seeds with a
//! marker radius of 3 pixels and the 15 named colors of [`PALETTE`].

use {
  image::Rgba,
  std::path::PathBuf,
  crate::error::{ErrorKind, Result}
};

pub const IMAGE_PATH: &str = "voronoi.png";
pub const IMAGE_WIDTH: u32 = 800;
pub const IMAGE_HEIGHT: u32 = 600;
/// Number of points in the image with an associated color.
pub const SEED_COUNT: usize = 20;
/// Marker radius, pixels.
pub const SEED_RADIUS: i32 = 3;

pub const COLOR_BACKGROUND: Rgba<u8> = Rgba([18, 18, 18, 255]);
pub const COLOR_SEED: Rgba<u8> = Rgba([0, 0, 0, 255]);

pub const AQUA: Rgba<u8> = Rgba([0, 255, 255, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const FUCHSIA: Rgba<u8> = Rgba([255, 0, 255, 255]);
pub const LIME: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
pub const TEAL: Rgba<u8> = Rgba([0, 128, 128, 255]);
pub const SILVER: Rgba<u8> = Rgba([192, 192, 192, 255]);
pub const GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);
pub const GREEN: Rgba<u8> = Rgba([0, 128, 0, 255]);
pub const NAVY: Rgba<u8> = Rgba([0, 0, 128, 255]);
pub const MAROON: Rgba<u8> = Rgba([128, 0, 0, 255]);
pub const OLIVE: Rgba<u8> = Rgba([128, 128, 0, 255]);
pub const PURPLE: Rgba<u8> = Rgba([128, 0, 128, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Cell fill colors, assigned to seeds round-robin.
pub const PALETTE: [Rgba<u8>; 15] = [
  AQUA, BLUE, FUCHSIA, LIME, YELLOW,
  TEAL, SILVER, GRAY, GREEN, NAVY,
  MAROON, OLIVE, PURPLE, RED, WHITE
];

/// Range a seed center coordinate is drawn from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SeedBounds {
  /// `[0, width) x [0, height)`, every center lands on a pixel.
  Exclusive,
  /// `[0, width] x [0, height]`; a center may sit one pixel past the right or bottom edge.
  Inclusive
}

impl Default for SeedBounds {
  fn default() -> Self { SeedBounds::Exclusive }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub width: u32,
  pub height: u32,
  pub seed_count: usize,
  pub seed_radius: i32,
  pub seed_bounds: SeedBounds,
  pub output_path: PathBuf,
  pub background: Rgba<u8>,
  pub marker: Rgba<u8>,
  pub palette: Vec<Rgba<u8>>
}

impl Default for Config {
  fn default() -> Self {
    Self {
      width: IMAGE_WIDTH,
      height: IMAGE_HEIGHT,
      seed_count: SEED_COUNT,
      seed_radius: SEED_RADIUS,
      seed_bounds: SeedBounds::default(),
      output_path: IMAGE_PATH.into(),
      background: COLOR_BACKGROUND,
      marker: COLOR_SEED,
      palette: PALETTE.to_vec()
    }
  }
}

impl Config {
  pub fn with_size(mut self, width: u32, height: u32) -> Self {
    self.width = width;
    self.height = height;
    self
  }

  pub fn with_palette(mut self, palette: impl Into<Vec<Rgba<u8>>>) -> Self {
    self.palette = palette.into();
    self
  }

  pub fn with_seed_bounds(mut self, seed_bounds: SeedBounds) -> Self {
    self.seed_bounds = seed_bounds;
    self
  }

  pub fn validate(&self) -> Result<()> {
    let reason = if self.width == 0 || self.height == 0 {
      format!("image size must be non-zero, got {}x{}", self.width, self.height)
    } else if self.width >= i32::MAX as u32 || self.height >= i32::MAX as u32 {
      format!("image size {}x{} exceeds pixel coordinate range", self.width, self.height)
    } else if self.seed_count == 0 {
      "seed count must be at least 1".to_string()
    } else if self.seed_radius < 0 {
      format!("seed radius must not be negative, got {}", self.seed_radius)
    } else if self.palette.is_empty() {
      "palette must contain at least one color".to_string()
    } else {
      return Ok(());
    };
    Err(ErrorKind::InvalidConfig(reason).into())
  }
}
