//! Voronoi diagrams rendered by brute-force nearest-seed assignment.
//!
//! A handful of seeds is scattered over the canvas. Every pixel takes the color of the
//! seed whose circle boundary is closest (see [`voronoi::nearest_seed`]); afterwards
//! each seed is stamped on top as a small filled marker.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   voronoi_cells::{config::Config, error::Result, render::Renderer},
//! #   rand::SeedableRng
//! # };
//! # fn main() -> Result<()> {
//! let renderer = Renderer::new(Config::default())?;
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let image = renderer.run(&mut rng); // 800x600, 20 seeds
//! renderer.save(&image)?; // voronoi.png
//! #   Ok(())
//! # }
//! ```
//! Seeds can also be placed by hand, which makes the output fully reproducible:
//! ```
//! # use voronoi_cells::{config::{self, Config}, geometry::P2, render::Renderer, voronoi::Seed};
//! let config = Config::default().with_size(10, 10);
//! let renderer = Renderer::new(config).unwrap();
//! let seeds = [
//!   Seed::new(P2::new(0, 0), 1, config::RED),
//!   Seed::new(P2::new(9, 9), 1, config::BLUE),
//! ];
//! let image = renderer.render(&seeds);
//! assert_eq!(*image.get_pixel(2, 3), config::RED);
//! assert_eq!(*image.get_pixel(9, 9), config::COLOR_SEED);
//! ```

pub mod error;
pub mod util;
pub mod config;
pub mod sdf;
pub mod geometry;
pub mod voronoi;
pub mod drawing;
pub mod render;
#[cfg(test)] mod tests;
