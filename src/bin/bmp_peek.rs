//! Prints the width and height of a BMP, the bytes from offset 70 onward, and
//! that byte count over 4.
//!
//! `bmp_peek <path-to-bmp>`
//!
//! Set `RUST_LOG=debug` to see the decoded header on stderr.

use imgpeek::{
  bmp::{bmp_peek_dimensions, BmpPixelRegion},
  ByteLit,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();

  let path = std::env::args_os().nth(1).ok_or("usage: bmp_peek <path-to-bmp>")?;
  let path = std::path::Path::new(&path);
  let bytes = std::fs::read(path)?;
  log::debug!("read {} bytes from `{}`", bytes.len(), path.display());

  let dimensions = bmp_peek_dimensions(&bytes)?;
  println!("{dimensions:?}");

  let pixels = BmpPixelRegion::from_bmp_bytes(&bytes);
  println!("{}", ByteLit(pixels.as_bytes()));
  println!("{:?}", pixels.assumed_pixel_count());
  Ok(())
}
