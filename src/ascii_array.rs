use core::fmt::Write;

use bytemuck::{Pod, Zeroable};

/// An array of bytes expected to contain ascii data.
///
/// There's no actual enforced encoding! The `Debug` and `Display` impls will
/// just `as` cast each byte into a character, which is fine for the tags that
/// image formats use (`BM`, `IHDR`, `IDAT`) and still safe for anything else.
///
/// Because it's `Pod`, it can sit directly inside the `#[repr(C)]` header
/// structs that get cast out of file bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AsciiArray<const N: usize>(pub [u8; N]);

unsafe impl<const N: usize> Zeroable for AsciiArray<N> {}
unsafe impl<const N: usize> Pod for AsciiArray<N> {}

impl<const N: usize> Default for AsciiArray<N> {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self::zeroed()
  }
}

impl<const N: usize> core::fmt::Debug for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    f.write_char('\"')?;
    Ok(())
  }
}
impl<const N: usize> core::fmt::Display for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}

impl<const N: usize> From<[u8; N]> for AsciiArray<N> {
  #[inline]
  #[must_use]
  fn from(array: [u8; N]) -> Self {
    Self(array)
  }
}

impl<const N: usize> PartialEq<[u8; N]> for AsciiArray<N> {
  #[inline]
  fn eq(&self, other: &[u8; N]) -> bool {
    self.0 == *other
  }
}
