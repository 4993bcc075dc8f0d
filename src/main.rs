use voronoi_cells::{
  config::Config,
  error::{self, Result},
  render::Renderer,
  util,
  profile
};

fn run() -> Result<()> {
  let renderer = Renderer::new(Config::default())?;
  let mut rng = util::time_seeded_rng();

  let image = profile!("render", renderer.run(&mut rng));
  profile!("png", renderer.save(&image))?;
  Ok(())
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  if let Err(e) = run() {
    error::display(&e);
    std::process::exit(1);
  }
}
