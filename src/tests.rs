use {
  crate::{
    config::{self, Config},
    error::{self, ErrorKind, Result},
    geometry::{Circle, Shape, P2},
    render::Renderer,
    voronoi::Seed
  },
  image::Rgba,
  rand::SeedableRng,
  std::path::PathBuf
};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn tiny(palette: Vec<Rgba<u8>>) -> Result<Renderer> {
  let config = Config {
    background: BLACK,
    marker: WHITE,
    ..Config::default()
  };
  Renderer::new(config.with_size(10, 10).with_palette(palette))
}

fn temp_path(name: &str) -> PathBuf {
  std::env::temp_dir().join(format!("voronoi_cells_{}_{}", std::process::id(), name))
}

#[test] fn single_seed() -> Result<()> {
  let renderer = tiny(vec![RED])?;
  let seeds = [Seed::new(P2::new(5, 5), 2, RED)];
  let image = renderer.render(&seeds);

  let marker = Circle::new(P2::new(5, 5), 2);
  image.enumerate_pixels().for_each(|(x, y, px)| {
    let expected = if marker.contains(P2::new(x as i32, y as i32)) { WHITE } else { RED };
    assert_eq!(*px, expected, "pixel ({}, {})", x, y);
  });
  assert_eq!(image.pixels().filter(|px| **px == WHITE).count(), 13);
  Ok(())
}

#[test] fn two_seeds_bisector() -> Result<()> {
  let (a, b) = (config::AQUA, config::NAVY);
  let renderer = tiny(vec![a, b])?;
  let seeds = [
    Seed::new(P2::new(0, 0), 1, a),
    Seed::new(P2::new(9, 9), 1, b)
  ];
  let image = renderer.render(&seeds);

  let markers = [Circle::new(P2::new(0, 0), 1), Circle::new(P2::new(9, 9), 1)];
  image.enumerate_pixels().for_each(|(x, y, px)| {
    let p = P2::new(x as i32, y as i32);
    let expected = if markers.iter().any(|m| m.contains(p)) {
      WHITE
    } else if x + y <= 9 {
      a // the diagonal x + y = 9 is a tie, first seed wins
    } else {
      b
    };
    assert_eq!(*px, expected, "pixel ({}, {})", x, y);
  });
  Ok(())
}

#[test] fn no_background_left() -> Result<()> {
  let renderer = Renderer::new(Config::default())?;
  let mut rng = rand_pcg::Pcg64::seed_from_u64(3);
  let image = renderer.run(&mut rng);
  let config = renderer.config();

  assert_eq!(image.dimensions(), (800, 600));
  assert!(image.pixels().all(|px|
    *px == config.marker || config.palette.contains(px)));
  assert!(image.pixels().all(|px| *px != config.background));
  Ok(())
}

#[test] fn deterministic() -> Result<()> {
  let renderer = Renderer::new(Config::default().with_size(120, 80))?;
  let seeds = renderer.generate_seeds(&mut rand_pcg::Pcg64::seed_from_u64(11));
  let first = renderer.render(&seeds);
  let second = renderer.render(&seeds);
  assert_eq!(first.as_raw(), second.as_raw());
  Ok(())
}

#[test] fn inclusive_bounds_render() -> Result<()> {
  // seeds on the far edge must not break marker drawing
  let config = Config::default()
    .with_size(4, 4)
    .with_seed_bounds(config::SeedBounds::Inclusive);
  let renderer = Renderer::new(config)?;
  let seeds = [
    Seed::new(P2::new(4, 4), 3, RED),
    Seed::new(P2::new(4, 0), 3, WHITE)
  ];
  let image = renderer.render(&seeds);
  assert_eq!(image.dimensions(), (4, 4));
  assert_eq!(*image.get_pixel(3, 3), config::COLOR_SEED);
  Ok(())
}

#[test] fn invalid_config() {
  let rejected = [
    Config { seed_count: 0, ..Config::default() },
    Config::default().with_palette(Vec::<Rgba<u8>>::new()),
    Config::default().with_size(0, 600),
    Config { seed_radius: -1, ..Config::default() }
  ];
  rejected.iter().cloned().for_each(|config| {
    let err = Renderer::new(config).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidConfig(_)), "{}", err);
  });
}

#[test] fn png_roundtrip() -> Result<()> {
  let renderer = Renderer::new(Config::default())?;
  let image = renderer.run(&mut rand_pcg::Pcg64::seed_from_u64(5));
  let path = temp_path("out.png");

  renderer.save_to(&image, &path)?;
  let decoded = image::open(&path)?.to_rgba8();
  std::fs::remove_file(&path)?;

  assert_eq!(decoded.dimensions(), (800, 600));
  assert_eq!(decoded.as_raw(), image.as_raw());
  Ok(())
}

#[test] fn save_to_missing_dir() -> Result<()> {
  let config = Config {
    output_path: temp_path("missing").join("voronoi.png"),
    ..Config::default().with_size(8, 8)
  };
  let renderer = Renderer::new(config)?;
  let image = renderer.render(&[Seed::new(P2::new(1, 1), 1, RED)]);

  let err = renderer.save(&image).unwrap_err();
  assert!(matches!(err.kind(), ErrorKind::OutputFile(_)), "{}", err);
  assert!(err.to_string().contains("voronoi.png"));

  // output file kind, then the io error it was chained on
  assert_eq!(err.iter().count(), 2);
  let msg = error::display(&err);
  assert!(msg.contains("└> 0 - unable to create output file"), "{}", msg);
  assert!(msg.contains("└> 1 - "), "{}", msg);
  Ok(())
}

#[cfg(target_os = "linux")]
#[test] fn save_to_full_device() -> Result<()> {
  // /dev/full opens fine but every write fails with ENOSPC
  let renderer = Renderer::new(Config::default().with_size(8, 8))?;
  let image = renderer.render(&[Seed::new(P2::new(1, 1), 1, RED)]);

  let err = renderer.save_to(&image, "/dev/full").unwrap_err();
  assert!(matches!(err.kind(), ErrorKind::Encode(_)), "{}", err);
  assert!(err.to_string().contains("/dev/full"));
  assert!(err.iter().count() >= 2);
  Ok(())
}

#[test] fn huge_radius_accepted_and_clipped() -> Result<()> {
  let config = Config {
    seed_radius: i32::MAX,
    marker: WHITE,
    ..Config::default().with_size(10, 10)
  };
  let renderer = Renderer::new(config)?;
  let mut rng = rand_pcg::Pcg64::seed_from_u64(9);
  let image = renderer.run(&mut rng);
  assert!(image.pixels().all(|px| *px == WHITE));
  Ok(())
}

#[test] fn far_seeds() -> Result<()> {
  let renderer = tiny(vec![RED])?;
  let seeds = [
    Seed::new(P2::new(i32::MIN, i32::MAX), 5, RED),
    Seed::new(P2::new(i32::MAX, i32::MIN), i32::MAX, config::BLUE)
  ];
  let image = renderer.render(&seeds);
  assert_eq!(image.dimensions(), (10, 10));
  // no marker reaches the canvas
  assert!(image.pixels().all(|px| *px == RED || *px == config::BLUE));
  Ok(())
}
