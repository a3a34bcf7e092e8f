//! Prints the width and height of a PNG, then the length, raw bytes, and
//! inflated bytes of the chunk at byte 33 (assumed to be the first `IDAT`).
//!
//! `png_peek <path-to-png>`
//!
//! Each line is printed as soon as it's known, so a failure part way through
//! still leaves the earlier lines on stdout. Set `RUST_LOG=warn` to be told
//! when the file's real `IDAT` isn't at byte 33.

use imgpeek::{
  png::{png_peek_dimensions, FixedIdat},
  ByteLit,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();

  let path = std::env::args_os().nth(1).ok_or("usage: png_peek <path-to-png>")?;
  let path = std::path::Path::new(&path);
  let bytes = std::fs::read(path)?;
  log::debug!("read {} bytes from `{}`", bytes.len(), path.display());

  let (width, height) = png_peek_dimensions(&bytes)?;
  println!("{width} {height}");

  let idat = FixedIdat::from_png_bytes(&bytes)?;
  println!("{}", idat.declared_len());
  println!("{}", ByteLit(idat.as_bytes()));

  let inflated = idat.inflate()?;
  println!("{}", ByteLit(&inflated));
  Ok(())
}
