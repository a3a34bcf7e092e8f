#![forbid(unsafe_code)]

//! Rendering raw bytes for humans.

use core::fmt::Write;

/// A borrowed byte slice that `Display`s as a bytes literal, `b'...'`.
///
/// * Printable ascii (`32..=126`) is written as-is.
/// * Tab, newline, and carriage return use their short escapes.
/// * The backslash and the active quote character get a backslash.
/// * Everything else is written as `\xNN` with lowercase hex.
///
/// Single quotes are used unless the data has a `'` and no `"`, in which case
/// double quotes are used instead. This matches the way Python prints a
/// `bytes` value, which is what most people poking at file dumps are used to
/// reading.
///
/// `Debug` gives the same output as `Display`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct ByteLit<'b>(pub &'b [u8]);

impl<'b> From<&'b [u8]> for ByteLit<'b> {
  #[inline]
  #[must_use]
  fn from(bytes: &'b [u8]) -> Self {
    Self(bytes)
  }
}

impl ByteLit<'_> {
  /// The quote character that the literal will be wrapped in.
  #[inline]
  #[must_use]
  pub fn quote(&self) -> char {
    if self.0.contains(&b'\'') && !self.0.contains(&b'"') {
      '"'
    } else {
      '\''
    }
  }
}

impl core::fmt::Display for ByteLit<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let quote = self.quote();
    f.write_char('b')?;
    f.write_char(quote)?;
    for &byte in self.0 {
      match byte {
        b'\t' => f.write_str("\\t")?,
        b'\n' => f.write_str("\\n")?,
        b'\r' => f.write_str("\\r")?,
        b'\\' => f.write_str("\\\\")?,
        32..=126 if byte as char == quote => {
          f.write_char('\\')?;
          f.write_char(quote)?;
        }
        32..=126 => f.write_char(byte as char)?,
        _ => write!(f, "\\x{byte:02x}")?,
      }
    }
    f.write_char(quote)
  }
}
impl core::fmt::Debug for ByteLit<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Display::fmt(self, f)
  }
}
