use super::*;

use crate::AsciiArray;

/// An unparsed chunk from a PNG.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngRawChunk<'b> {
  /// Byte index of the chunk (its length field) within the full PNG bytes.
  pub offset: usize,
  pub type_: AsciiArray<4>,
  pub data: &'b [u8],
  pub declared_crc: u32,
}
impl fmt::Debug for PngRawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PngRawChunk")
      .field("offset", &self.offset)
      .field("type_", &self.type_)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// This never panics, even on random data. It stops at the first chunk that
/// doesn't fully fit in the remaining bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngRawChunkIter<'b> {
  bytes: &'b [u8],
  offset: usize,
}
impl<'b> PngRawChunkIter<'b> {
  /// Pass the full PNG bytes, it will skip the PNG signature automatically.
  ///
  /// The signature isn't checked, whatever the first 8 bytes are get skipped.
  #[inline]
  pub const fn new(bytes: &'b [u8]) -> Self {
    match bytes {
      [_, _, _, _, _, _, _, _, rest @ ..] => Self { bytes: rest, offset: 8 },
      _ => Self { bytes: &[], offset: 0 },
    }
  }
}
impl<'b> Iterator for PngRawChunkIter<'b> {
  type Item = PngRawChunk<'b>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let (len_bytes, rest) = crate::try_pull_byte_array::<4>(self.bytes)?;
    let chunk_len = u32::from_be_bytes(len_bytes) as usize;
    let (type_bytes, rest) = crate::try_pull_byte_array::<4>(rest)?;
    if rest.len() < chunk_len {
      self.bytes = &[];
      return None;
    }
    let (data, rest) = rest.split_at(chunk_len);
    let (crc_bytes, rest) = crate::try_pull_byte_array::<4>(rest)?;
    let chunk = PngRawChunk {
      offset: self.offset,
      type_: AsciiArray(type_bytes),
      data,
      declared_crc: u32::from_be_bytes(crc_bytes),
    };
    self.offset += 12 + chunk_len;
    self.bytes = rest;
    Some(chunk)
  }
}

/// Walks the chunks and gives the byte index of the first `IDAT` chunk.
///
/// This is what the fixed offset *should* have been for this file.
#[inline]
#[must_use]
pub fn png_walk_idat_offset(png: &[u8]) -> Option<usize> {
  PngRawChunkIter::new(png).find(|chunk| chunk.type_ == *b"IDAT").map(|chunk| chunk.offset)
}
