use super::*;

use alloc::vec::Vec;

use pack1::*;

use crate::{clamped_subslice, try_pull_byte_array, AsciiArray};

/// Where the image data chunk is assumed to start.
///
/// That's right after the signature and the `IHDR` chunk.
pub const PNG_ASSUMED_IDAT_OFFSET: usize = 33;

/// Size of a chunk's length and type fields.
pub const PNG_CHUNK_HEAD_SIZE: usize = 8;

/// The first 24 bytes of a PNG.
///
/// That's the signature, the `IHDR` chunk's length and tag, and then the
/// width and height, which are the first two fields of the `IHDR` data.
#[derive(Debug, Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub struct PngPeekHeader {
  pub signature: [u8; 8],
  pub ihdr_length: U32BE,
  /// Should be `IHDR`.
  pub ihdr_tag: AsciiArray<4>,
  pub width: U32BE,
  pub height: U32BE,
}
impl PngPeekHeader {
  /// Number of bytes this header covers.
  pub const SIZE: usize = core::mem::size_of::<Self>();

  /// Reads the header from the start of the PNG bytes.
  ///
  /// ## Failure
  /// * [`PngError::InsufficientBytes`] if there's less than [`Self::SIZE`]
  ///   bytes.
  pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, PngError> {
    let (a, _rest) = try_pull_byte_array::<24>(bytes).ok_or(PngError::InsufficientBytes)?;
    let header: Self = bytemuck::cast(a);
    log::debug!("{header:?}");
    if !is_png_header_correct(bytes) {
      log::warn!("PNG signature is incorrect: {:?}", header.signature);
    }
    if header.ihdr_tag != *b"IHDR" {
      log::warn!("first PNG chunk is {:?}, expected \"IHDR\"", header.ihdr_tag);
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

/// Gets `(width, height)` from the fixed offsets 16 and 20.
#[inline]
pub fn png_peek_dimensions(bytes: &[u8]) -> Result<(u32, u32), PngError> {
  PngPeekHeader::try_from_bytes(bytes).map(|h| h.dimensions())
}

/// The chunk found at [`PNG_ASSUMED_IDAT_OFFSET`], assumed to be `IDAT`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedIdat<'b> {
  declared_len: u32,
  data: &'b [u8],
}
impl fmt::Debug for FixedIdat<'_> {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("FixedIdat")
      .field(&self.declared_len)
      .field(&&self.data[..self.data.len().min(12)])
      .field(&self.data.len())
      .finish()
  }
}
impl<'b> FixedIdat<'b> {
  /// Pass the full PNG bytes.
  ///
  /// Reads the length at byte 33 and takes that many bytes starting at byte
  /// 41. If the file ends early the data is cut short rather than failing
  /// here, so [`inflate`](Self::inflate) will usually fail instead.
  ///
  /// ## Failure
  /// * [`PngError::InsufficientBytes`] if the length field itself isn't all
  ///   there (less than 37 bytes).
  pub fn from_png_bytes(png: &'b [u8]) -> Result<Self, PngError> {
    let after = png.get(PNG_ASSUMED_IDAT_OFFSET..).ok_or(PngError::InsufficientBytes)?;
    let (len_bytes, _rest) = try_pull_byte_array::<4>(after).ok_or(PngError::InsufficientBytes)?;
    let declared_len = u32::from_be_bytes(len_bytes);
    let data = clamped_subslice(after, PNG_CHUNK_HEAD_SIZE, declared_len as usize);
    log::trace!(
      "fixed IDAT: declared {declared_len} bytes, got {} bytes at {}",
      data.len(),
      PNG_ASSUMED_IDAT_OFFSET + PNG_CHUNK_HEAD_SIZE
    );
    let tag = try_pull_byte_array::<4>(&after[4..]).map(|(tag, _)| AsciiArray(tag));
    match png_walk_idat_offset(png) {
      Some(PNG_ASSUMED_IDAT_OFFSET) => (),
      Some(actual) => log::warn!(
        "first IDAT chunk is at byte {actual}, but byte {PNG_ASSUMED_IDAT_OFFSET} (a {tag:?} chunk) will be used"
      ),
      None => log::warn!(
        "no complete IDAT chunk found by walking the chunks, byte {PNG_ASSUMED_IDAT_OFFSET} is a {tag:?} chunk"
      ),
    }
    Ok(Self { declared_len, data })
  }

  /// The length declared in the chunk's length field.
  #[inline]
  #[must_use]
  pub const fn declared_len(&self) -> u32 {
    self.declared_len
  }

  /// The sliced compressed bytes.
  ///
  /// This is shorter than [`declared_len`](Self::declared_len) only when the
  /// file was shorter than the declared chunk.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &'b [u8] {
    self.data
  }

  /// Inflates the sliced bytes as a zlib stream.
  ///
  /// The zlib header is parsed and the Adler32 checksum is computed by the
  /// decompressor, so a damaged stream is reported as an error.
  ///
  /// ## Failure
  /// * [`PngError::Decompression`] with the decompressor's status.
  pub fn inflate(&self) -> Result<Vec<u8>, PngError> {
    match miniz_oxide::inflate::decompress_to_vec_zlib(self.data) {
      Ok(v) => {
        log::trace!("inflated {} bytes into {} bytes", self.data.len(), v.len());
        Ok(v)
      }
      Err(e) => Err(PngError::Decompression(e.status)),
    }
  }
}
