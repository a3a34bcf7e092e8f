#![forbid(unsafe_code)]

//! Module for peeking at PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! A PNG is an 8 byte signature followed by "chunks". Each chunk is a
//! big-endian `u32` length, a 4 byte type tag, `length` bytes of data, and a
//! big-endian `u32` CRC. The first chunk is always `IHDR` (13 data bytes, so
//! 25 bytes in total), which puts the end of the header at byte 33.
//!
//! ## Fixed Offsets
//!
//! The peek functions here don't walk the chunk list. They assume the simplest
//! possible file, where the first `IDAT` comes directly after `IHDR`:
//!
//! | bytes      | value                                   |
//! |:-----------|:----------------------------------------|
//! | `0..8`     | signature                               |
//! | `16..20`   | IHDR width                              |
//! | `20..24`   | IHDR height                             |
//! | `33..37`   | length of the chunk at 33 (the "IDAT")  |
//! | `37..41`   | type tag of that chunk                  |
//! | `41..41+n` | the chunk's zlib compressed data        |
//!
//! Any ancillary chunk between `IHDR` and `IDAT` (`sRGB`, `gAMA`, `pHYs`, and
//! so on, which are *very* common) breaks this: the "IDAT" that gets sliced is
//! actually that other chunk, and inflating it fails or gives junk. That's a
//! known limitation, the slicing is kept fixed on purpose. To make the problem
//! easier to spot, [`FixedIdat::from_png_bytes`] walks the chunks with a
//! [`PngRawChunkIter`] and logs a warning when the real `IDAT` is elsewhere.
//!
//! Checksums (the chunk CRCs) are not checked.

use core::fmt;

mod raw_chunk;
pub use raw_chunk::*;

mod fixed;
pub use fixed::*;


/// The 8 bytes that every PNG starts with.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
///
/// Nothing else in this module requires this, it's only used for a warning.
#[inline]
#[must_use]
pub fn is_png_header_correct(png: &[u8]) -> bool {
  png.starts_with(&PNG_SIGNATURE)
}

/// An error from peeking at PNG data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PngError {
  /// There weren't enough bytes to read a fixed offset value.
  InsufficientBytes,
  /// The bytes at the fixed offset didn't inflate as a zlib stream.
  Decompression(miniz_oxide::inflate::TINFLStatus),
}
impl fmt::Display for PngError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InsufficientBytes => f.write_str("not enough bytes for the fixed PNG offsets"),
      Self::Decompression(status) => write!(f, "zlib decompression failed: {status:?}"),
    }
  }
}
#[cfg(feature = "std")]
impl std::error::Error for PngError {}
