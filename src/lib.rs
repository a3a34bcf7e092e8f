#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]

//! Fixed-offset peeking at BMP and PNG files.
//!
//! This is a debugging aid for asset pipelines, not an image decoder. Each
//! format module reads a handful of values at *fixed* byte offsets that are
//! correct for the common, simple layout of that format, and hands back
//! borrowed slices of the file. Nothing is validated: if a file doesn't use
//! the assumed layout you get nonsense values, not an error. The only errors
//! are running off the end of the data and (for PNG) the zlib stream failing
//! to inflate.
//!
//! The `bmp_peek` and `png_peek` binaries print what these functions return.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod ascii_array;
pub use ascii_array::*;

pub mod byte_repr;
pub use byte_repr::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

#[cfg(feature = "png")]
#[cfg_attr(docs_rs, doc(cfg(feature = "png")))]
pub mod png;

#[cfg(feature = "bmp")]
#[cfg_attr(docs_rs, doc(cfg(feature = "bmp")))]
pub mod bmp;
