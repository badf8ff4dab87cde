//! Decoder for RouterBOARD WLAN calibration data.
//!
//! The calibration record of the hard config comes in three flavours,
//! distinguished by a leading magic number (see [Variant]):
//!
//! - no magic: the record is RLE-encoded calibration data,
//! - `ERD`: a tag list locating LZO-compressed calibration data,
//! - `LZOR`: an LZO stream that only decompresses when appended to a fixed
//!   dictionary-priming prefix, and which holds an `ERD` style tag list
//!   locating RLE-encoded calibration data.
//!
//! The [unpack] function decodes any of them into a freshly allocated
//! buffer.

mod consts;
mod decode;

pub use consts::{ART_SIZE, LZOR_PREFIX, MAGIC_ERD, MAGIC_LZOR};
pub use decode::*;
