use {
  rand::SeedableRng,
  rand_pcg::Pcg64,
  std::time::{SystemTime, UNIX_EPOCH}
};

/// Evaluate an expression and log how long it took.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    ::log::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Generator seeded from wall-clock nanoseconds; a new distribution on every run.
pub fn time_seeded_rng() -> Pcg64 {
  let nanos = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_nanos() as u64)
    .unwrap_or_default();
  Pcg64::seed_from_u64(nanos)
}
