//! Orchestration: background, cells, markers, png.

use {
  std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path
  },
  image::{codecs::png::PngEncoder, ColorType, ImageEncoder, RgbaImage},
  rand::Rng,
  crate::{
    config::Config,
    drawing::{Cells, Draw},
    error::{ErrorKind, Result, ResultExt},
    geometry::Shape,
    voronoi::{self, Seed},
    profile
  }
};

#[derive(Debug, Clone)]
pub struct Renderer {
  config: Config
}

impl Renderer {
  pub fn new(config: Config) -> Result<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn generate_seeds(&self, rng: &mut impl Rng) -> Vec<Seed> {
    voronoi::generate_seeds(&self.config, rng)
  }

  /// Pure function of `seeds`: the same list always yields the same buffer.
  pub fn render(&self, seeds: &[Seed]) -> RgbaImage {
    let Config { width, height, background, marker, .. } = self.config;
    let mut image = RgbaImage::from_pixel(width, height, background);

    profile!("cells", Cells::new(seeds).draw(&mut image));
    profile!("markers", seeds.iter()
      .for_each(|seed| seed.circle
        .texture(marker)
        .draw(&mut image)));

    image
  }

  /// Fresh seeds from `rng`, rendered.
  pub fn run(&self, rng: &mut impl Rng) -> RgbaImage {
    let seeds = self.generate_seeds(rng);
    self.render(&seeds)
  }

  /// Write to the configured output path.
  pub fn save(&self, image: &RgbaImage) -> Result<()> {
    self.save_to(image, &self.config.output_path)
  }

  /// Encode `image` as RGBA8 png. The file is created (or truncated) first; both a
  /// failed create and a failed encode are reported with the offending path.
  pub fn save_to(&self, image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    use humansize::{FileSize, file_size_opts as options};

    let path = path.as_ref();
    let display = path.display().to_string();

    let file = File::create(path)
      .chain_err(|| ErrorKind::OutputFile(display.clone()))?;
    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer)
      .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
      .chain_err(|| ErrorKind::Encode(display.clone()))?;
    writer.flush()
      .chain_err(|| ErrorKind::Encode(display.clone()))?;

    let size = fs::metadata(path)?.len();
    log::info!("wrote {} ({})", display, size.file_size(options::BINARY).unwrap_or_else(|e| e));
    Ok(())
  }
}
