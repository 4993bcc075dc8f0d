use {
  euclid::Size2D,
  image::{Pixel, Rgba, RgbaImage},
  rayon::prelude::*,
  crate::{
    drawing::{Cells, Draw, Texture},
    geometry::{clip_to_canvas, PixelSpace, Shape, P2},
    voronoi::nearest_seed
  }
};

/// Only the part of the bounding box that overlaps the canvas is visited.
impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let bounding_box = match clip_to_canvas(self.shape.bounding_box(), resolution) {
      Some(x) => x,
      None => return // bounding box has no intersection with canvas at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .filter(|&(y, x)| self.shape.contains(P2::new(x as i32, y as i32)))
      .for_each(|(y, x)| image.put_pixel(x, y, self.texture));
  }
}

/// Rows are independent and are colored in parallel.
impl Draw<RgbaImage> for Cells<'_> {
  fn draw(&self, image: &mut RgbaImage) {
    let channels = Rgba::<u8>::CHANNEL_COUNT as usize;
    let row_len = image.width() as usize * channels;
    if row_len == 0 || self.seeds.is_empty() {
      return;
    }

    image.par_chunks_mut(row_len)
      .enumerate()
      .for_each(|(y, row)| row
        .chunks_exact_mut(channels)
        .enumerate()
        .for_each(|(x, pixel)| {
          if let Some(seed) = nearest_seed(P2::new(x as i32, y as i32), self.seeds) {
            pixel.copy_from_slice(&seed.color.0);
          }
        })
      );
  }
}
