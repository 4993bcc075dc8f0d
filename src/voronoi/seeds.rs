use {
  rand::Rng,
  crate::{
    config::{Config, SeedBounds},
    geometry::P2,
    voronoi::Seed
  }
};

/// Place `config.seed_count` seeds uniformly at random.
///
/// Colors cycle through the palette in order: seed `i` gets `palette[i % palette.len()]`.
/// For each seed the x coordinate is drawn before y, so a seeded generator always
/// yields the same list.
///
/// Expects a validated config: a zero width or height panics in the coordinate draw.
pub fn generate_seeds(config: &Config, rng: &mut impl Rng) -> Vec<Seed> {
  let (x_end, y_end) = match config.seed_bounds {
    SeedBounds::Exclusive => (config.width as i32, config.height as i32),
    SeedBounds::Inclusive => (config.width as i32 + 1, config.height as i32 + 1)
  };

  let seeds = config.palette.iter()
    .cycle()
    .take(config.seed_count)
    .map(|&color| {
      let x = rng.gen_range(0..x_end);
      let y = rng.gen_range(0..y_end);
      Seed::new(P2::new(x, y), config.seed_radius, color)
    })
    .collect::<Vec<_>>();

  log::debug!("generated {} seeds: {:?}", seeds.len(), seeds);
  seeds
}
