use imgpeek::png::{
  png_peek_dimensions, png_walk_idat_offset, FixedIdat, PngError, PngRawChunkIter,
  PNG_ASSUMED_IDAT_OFFSET,
};
use miniz_oxide::deflate::compress_to_vec_zlib;
use walkdir::WalkDir;

#[test]
fn test_png_dimensions_from_ihdr() {
  for (w, h) in [(1, 1), (256, 3), (4096, 4096)] {
    let png = super::synthetic_png(w, h, &[], &[]);
    assert_eq!(png_peek_dimensions(&png), Ok((w, h)));
  }
}

#[test]
fn test_png_zlib_round_trip_at_fixed_offsets() {
  // 3x2 RGB with a filter byte at the start of each line
  let original: Vec<u8> = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 1, 11, 21, 31, 41, 51, 61, 71, 81, 91]
    .to_vec();
  let compressed = compress_to_vec_zlib(&original, 9);
  let png = super::synthetic_png(3, 2, &[], &compressed);

  let idat = FixedIdat::from_png_bytes(&png).unwrap();
  assert_eq!(idat.declared_len() as usize, compressed.len());
  assert_eq!(idat.as_bytes(), &png[41..41 + compressed.len()]);
  assert_eq!(idat.inflate(), Ok(original));
}

#[test]
fn test_png_random_payload_round_trip() {
  let original = super::rand_bytes(5000);
  let compressed = compress_to_vec_zlib(&original, 1);
  let png = super::synthetic_png(50, 25, &[], &compressed);
  assert_eq!(FixedIdat::from_png_bytes(&png).unwrap().inflate(), Ok(original));
}

#[test]
fn test_png_too_short_for_fixed_offsets() {
  let png = super::synthetic_png(1, 1, &[], &compress_to_vec_zlib(b"abc", 6));
  assert_eq!(png_peek_dimensions(&png[..23]), Err(PngError::InsufficientBytes));
  assert_eq!(png_peek_dimensions(&png[..24]), Ok((1, 1)));
  assert_eq!(FixedIdat::from_png_bytes(&png[..36]), Err(PngError::InsufficientBytes));
}

#[test]
fn test_png_ancillary_chunk_is_a_known_limitation() {
  let original = b"the real scanlines".to_vec();
  let compressed = compress_to_vec_zlib(&original, 6);
  let phys = super::png_chunk(b"pHYs", &[0, 0, 11, 19, 0, 0, 11, 19, 1]);
  let png = super::synthetic_png(4, 1, &[phys], &compressed);

  // the fixed offset lands on pHYs instead of IDAT
  let idat = FixedIdat::from_png_bytes(&png).unwrap();
  assert_eq!(idat.declared_len(), 9);
  assert_eq!(&png[37..41], b"pHYs");
  assert!(matches!(idat.inflate(), Err(PngError::Decompression(_))));

  // while walking the chunks finds where IDAT actually is
  let real = png_walk_idat_offset(&png).unwrap();
  assert_eq!(real, PNG_ASSUMED_IDAT_OFFSET + 12 + 9);
  assert_ne!(real, PNG_ASSUMED_IDAT_OFFSET);
}

#[test]
fn test_png_truncated_payload_is_clamped() {
  let compressed = compress_to_vec_zlib(&[7; 64], 6);
  let png = super::synthetic_png(4, 4, &[], &compressed);
  let cut = &png[..41 + compressed.len() / 2];
  let idat = FixedIdat::from_png_bytes(cut).unwrap();
  assert_eq!(idat.declared_len() as usize, compressed.len());
  assert_eq!(idat.as_bytes(), &compressed[..compressed.len() / 2]);
  assert!(matches!(idat.inflate(), Err(PngError::Decompression(_))));
}

#[test]
fn test_PngRawChunkIter_offsets() {
  let gama = super::png_chunk(b"gAMA", &[0, 0, 177, 143]);
  let png = super::synthetic_png(1, 1, &[gama], &[9, 9, 9]);
  let found: Vec<(usize, [u8; 4], usize)> =
    PngRawChunkIter::new(&png).map(|c| (c.offset, c.type_.0, c.data.len())).collect();
  assert_eq!(found, [(8, *b"IHDR", 13), (33, *b"gAMA", 4), (49, *b"IDAT", 3), (64, *b"IEND", 0)]);
  // cut into the middle of the IDAT data
  assert_eq!(PngRawChunkIter::new(&png[..55]).count(), 2);
  assert_eq!(png_walk_idat_offset(&png[..55]), None);
}

#[rustfmt::skip]
const RGBA_3X2_SCANLINES: [u8; 26] = [
  0, 0, 0, 200, 255, 80, 0, 200, 255, 160, 0, 200, 255,
  0, 0, 120, 200, 255, 80, 120, 200, 255, 160, 120, 200, 255,
];

#[test]
fn test_png_fixture_plain() {
  let png = std::fs::read("tests/images/rgba_3x2.png").unwrap();
  assert_eq!(png_peek_dimensions(&png), Ok((3, 2)));
  assert_eq!(png_walk_idat_offset(&png), Some(PNG_ASSUMED_IDAT_OFFSET));
  let idat = FixedIdat::from_png_bytes(&png).unwrap();
  assert_eq!(idat.declared_len(), 27);
  assert_eq!(idat.inflate(), Ok(RGBA_3X2_SCANLINES.to_vec()));
}

#[test]
fn test_png_fixture_with_srgb_chunk() {
  let png = std::fs::read("tests/images/rgba_3x2_srgb.png").unwrap();
  assert_eq!(png_peek_dimensions(&png), Ok((3, 2)));
  // sRGB is 13 bytes in total, pushing IDAT along
  assert_eq!(png_walk_idat_offset(&png), Some(PNG_ASSUMED_IDAT_OFFSET + 13));
  let idat = FixedIdat::from_png_bytes(&png).unwrap();
  assert_eq!(idat.declared_len(), 1);
  assert_eq!(idat.as_bytes(), &[0]);
  assert!(idat.inflate().is_err());
}

#[test]
fn test_PngRawChunkIter_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    for _ in PngRawChunkIter::new(&v) {
      //
    }
    if let Ok(idat) = FixedIdat::from_png_bytes(&v) {
      let _ = idat.inflate();
    }
  }
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in PngRawChunkIter::new(&v) {
      //
    }
    let _ = png_peek_dimensions(&v);
    if let Ok(idat) = FixedIdat::from_png_bytes(&v) {
      let _ = idat.inflate();
    }
  }
}
