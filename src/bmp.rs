#![forbid(unsafe_code)]

//! Module for peeking at Windows Bitmap files (BMP).
//!
//! Note: All multi-byte values in BMP are always little-endian encoded.
//!
//! A real bitmap file is a 14 byte "file header", then an "info header" that
//! comes in many versions (each a different size), then maybe bitmasks, then
//! maybe a color table, then maybe a gap, and then the pixel array. A proper
//! decoder has to walk all of that.
//!
//! This module doesn't. It assumes the layout that a 32 bits per pixel file
//! with a 56 byte info header has (the "V3" info header that many image
//! editors write for BGRA data):
//!
//! * bytes `0..14` are the file header,
//! * the width and height are the `u32` values at bytes 18 and 22,
//! * pixel data starts at byte [`BMP_ASSUMED_PIXEL_OFFSET`] (70) and runs to
//!   the end of the file,
//! * each pixel is 4 bytes (`[b, g, r, a]`), with no row padding.
//!
//! None of this is checked. The declared pixel offset *is* read, but only so
//! that a mismatch can be reported through `log::warn!`.

use core::fmt;

use pack1::*;

use crate::{try_pull_byte_array, AsciiArray};

/// Where the pixel data is assumed to start.
pub const BMP_ASSUMED_PIXEL_OFFSET: usize = 70;

/// How many bytes each pixel is assumed to take.
pub const BMP_ASSUMED_BYTES_PER_PIXEL: usize = 4;

/// An error from peeking at BMP data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum BmpError {
  /// There weren't enough bytes to read the header values.
  InsufficientBytes,
}
impl fmt::Display for BmpError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InsufficientBytes => {
        write!(f, "need at least {} bytes to read the BMP header", BmpPeekHeader::SIZE)
      }
    }
  }
}
#[cfg(feature = "std")]
impl std::error::Error for BmpError {}

/// The first 26 bytes of a BMP file.
///
/// That's the whole file header plus the start of the info header, which is
/// just far enough to reach the width and height. The info header's width and
/// height are *signed* in most header versions (negative height means a
/// top-down image), but here they're read as unsigned.
#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub struct BmpPeekHeader {
  /// Usually `BM`.
  pub tag: AsciiArray<2>,
  /// The total size of the file, as declared.
  pub file_size: U32LE,
  pub reserved1: U16LE,
  pub reserved2: U16LE,
  /// The declared byte index where the pixel data starts.
  pub pixel_data_offset: U32LE,
  /// The declared size of the info header, which identifies its version.
  pub info_header_size: U32LE,
  pub width: U32LE,
  pub height: U32LE,
}
impl BmpPeekHeader {
  /// Number of bytes this header covers.
  pub const SIZE: usize = core::mem::size_of::<Self>();

  /// Reads the header from the start of the BMP bytes.
  ///
  /// ## Failure
  /// * [`BmpError::InsufficientBytes`] if there's less than [`Self::SIZE`]
  ///   bytes.
  pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, BmpError> {
    let (a, _rest) = try_pull_byte_array::<26>(bytes).ok_or(BmpError::InsufficientBytes)?;
    let header: Self = bytemuck::cast(a);
    log::debug!("{header:?}");
    if header.tag != *b"BM" {
      log::warn!("BMP tag is {:?}, expected \"BM\"", header.tag);
    }
    if header.pixel_data_offset.get() as usize != BMP_ASSUMED_PIXEL_OFFSET {
      log::warn!(
        "BMP header says pixel data starts at byte {}, but byte {BMP_ASSUMED_PIXEL_OFFSET} will be used",
        header.pixel_data_offset.get()
      );
    }
    Ok(header)
  }

  /// `(width, height)`
  #[inline]
  #[must_use]
  pub fn dimensions(&self) -> (u32, u32) {
    (self.width.get(), self.height.get())
  }
}

/// Gets `(width, height)` from the fixed offsets 18 and 22.
#[inline]
pub fn bmp_peek_dimensions(bytes: &[u8]) -> Result<(u32, u32), BmpError> {
  BmpPeekHeader::try_from_bytes(bytes).map(|h| h.dimensions())
}

/// The bytes from [`BMP_ASSUMED_PIXEL_OFFSET`] to the end of the file.
///
/// This never fails. A file that's too short just gives an empty region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct BmpPixelRegion<'b>(&'b [u8]);
impl<'b> BmpPixelRegion<'b> {
  /// Pass the full BMP bytes.
  #[inline]
  #[must_use]
  pub fn from_bmp_bytes(bytes: &'b [u8]) -> Self {
    let region = bytes.get(BMP_ASSUMED_PIXEL_OFFSET..).unwrap_or(&[]);
    log::trace!("BMP pixel region: {}..{}", BMP_ASSUMED_PIXEL_OFFSET, bytes.len());
    Self(region)
  }

  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &'b [u8] {
    self.0
  }

  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.0.len()
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// The region's length over 4, as a float.
  ///
  /// If the region isn't a whole number of pixels you'll see a fraction here,
  /// which is a decent hint that the layout assumptions don't hold.
  #[inline]
  #[must_use]
  pub fn assumed_pixel_count(&self) -> f64 {
    self.0.len() as f64 / BMP_ASSUMED_BYTES_PER_PIXEL as f64
  }

  /// The region as whole `[b, g, r, a]` pixels.
  ///
  /// Any trailing partial pixel is left off.
  #[inline]
  #[must_use]
  pub fn bgra_pixels(&self) -> &'b [[u8; 4]] {
    let whole = self.0.len() - (self.0.len() % BMP_ASSUMED_BYTES_PER_PIXEL);
    bytemuck::cast_slice(&self.0[..whole])
  }
}
