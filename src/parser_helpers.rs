#![forbid(unsafe_code)]

//! Just has shorthands for the slice splitting that the peek functions do.

/// Splits `N` bytes off the front of the slice, if there's enough bytes.
#[inline]
pub fn try_pull_byte_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    let a: [u8; N] = head.try_into().ok()?;
    Some((a, tail))
  } else {
    None
  }
}

/// Like `bytes[start..start + len]` but clamped to the end of the slice, the
/// way a scripting language slice would be.
///
/// Gives an empty slice when `start` is past the end.
#[inline]
#[must_use]
pub fn clamped_subslice(bytes: &[u8], start: usize, len: usize) -> &[u8] {
  match bytes.get(start..) {
    Some(rest) => &rest[..len.min(rest.len())],
    None => &[],
  }
}

#[test]
fn test_clamped_subslice() {
  let b = [1_u8, 2, 3, 4, 5];
  assert_eq!(clamped_subslice(&b, 1, 2), &[2, 3]);
  assert_eq!(clamped_subslice(&b, 3, 10), &[4, 5]);
  assert_eq!(clamped_subslice(&b, 5, 1), &[] as &[u8]);
  assert_eq!(clamped_subslice(&b, 9, 1), &[] as &[u8]);
}

#[test]
fn test_try_pull_byte_array() {
  let b = [1_u8, 2, 3];
  assert_eq!(try_pull_byte_array::<2>(&b), Some(([1, 2], &b[2..])));
  assert_eq!(try_pull_byte_array::<4>(&b), None);
}
