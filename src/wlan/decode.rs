use super::consts::*;
use crate::lzo::{self, LzoError};
use crate::rle::{self, RleError};
use crate::tag;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnpackError {
    #[error("record at {offset} with length {len} exceeds blob of {blob_len} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        blob_len: usize,
    },
    #[error("empty WLAN data record")]
    Empty,
    #[error("LZOR data of {len} bytes does not fit in {capacity} bytes")]
    BufferTooLarge { len: usize, capacity: usize },
    #[error("embedded tag not found")]
    MissingEmbeddedTag,
    #[error("invalid embedded tag length {len} at offset {offset} ({available} bytes available)")]
    InvalidLength {
        offset: usize,
        len: usize,
        available: usize,
    },
    #[error("LZO decompression failed")]
    DecompressionFailed(#[source] LzoError),
    #[error("ERD magic not found in LZOR data")]
    EmbeddedMagicNotFound,
    #[error("RLE decoding failed")]
    Rle(#[from] RleError),
}

/// Encoding of a WLAN calibration record, selected by its leading magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// RLE-encoded calibration data, without magic.
    Raw,
    /// Tag list locating LZO-compressed calibration data.
    Erd,
    /// LZO stream continuing [LZOR_PREFIX], holding an ERD magic followed
    /// by a tag list locating RLE-encoded calibration data.
    Lzor,
}

impl Variant {
    pub fn detect(record: &[u8]) -> Variant {
        let Some(magic) = record.get(..MAGIC_SIZE) else {
            return Variant::Raw;
        };

        match u32::from_le_bytes(magic.try_into().unwrap()) {
            MAGIC_LZOR => Variant::Lzor,
            MAGIC_ERD => Variant::Erd,
            _ => Variant::Raw,
        }
    }
}

/// Unpacks the WLAN calibration record located at `offset..offset + len` in
/// `blob` into a buffer of at most `capacity` bytes.
pub fn unpack(
    blob: &[u8],
    offset: usize,
    len: usize,
    capacity: usize,
) -> Result<Vec<u8>, UnpackError> {
    let record = offset
        .checked_add(len)
        .and_then(|end| blob.get(offset..end))
        .ok_or(UnpackError::OutOfBounds {
            offset,
            len,
            blob_len: blob.len(),
        })?;

    unpack_record(record, capacity)
}

/// Unpacks a WLAN calibration record into a buffer of at most `capacity`
/// bytes.
pub fn unpack_record(record: &[u8], capacity: usize) -> Result<Vec<u8>, UnpackError> {
    unpack_with_prefix(record, capacity, &LZOR_PREFIX)
}

fn unpack_with_prefix(
    record: &[u8],
    capacity: usize,
    prefix: &[u8],
) -> Result<Vec<u8>, UnpackError> {
    if record.is_empty() {
        return Err(UnpackError::Empty);
    }

    let mut out = vec![0; capacity];
    let len = match Variant::detect(record) {
        Variant::Lzor => unpack_lzor(&record[MAGIC_SIZE..], prefix, &mut out)?,
        Variant::Erd => unpack_erd(&record[MAGIC_SIZE..], &mut out)?,
        Variant::Raw => rle::decode(record, &mut out)
            .inspect_err(|err| debug!("RLE decoding error ({err})"))?,
    };

    out.truncate(len);
    Ok(out)
}

fn unpack_erd(payload: &[u8], out: &mut [u8]) -> Result<usize, UnpackError> {
    let data = embedded_payload(payload).inspect_err(|err| debug!("ERD: {err}"))?;

    lzo::decompress(data, out).map_err(|err| {
        debug!("ERD: LZO decompression error ({err})");
        UnpackError::DecompressionFailed(err)
    })
}

fn unpack_lzor(payload: &[u8], prefix: &[u8], out: &mut [u8]) -> Result<usize, UnpackError> {
    let len = payload.len() + prefix.len();
    if len > out.len() {
        return Err(UnpackError::BufferTooLarge {
            len,
            capacity: out.len(),
        });
    }

    let mut stream = Vec::with_capacity(len);
    stream.extend_from_slice(prefix);
    stream.extend_from_slice(payload);

    let mut scratch = vec![0; out.len()];
    let filled = match lzo::decompress(&stream, &mut scratch) {
        Ok(len) => len,
        // The record length is always aligned, padding the LZO stream. This
        // has held for every sample seen so far, it is not guaranteed.
        Err(LzoError::InputNotConsumed { len, remaining }) => {
            debug!("LZOR: LZO EOF {remaining} bytes before buffer end - this may be harmless");
            len
        }
        Err(err) => {
            debug!("LZOR: LZO decompression error ({err})");
            return Err(UnpackError::DecompressionFailed(err));
        }
    };

    let tail = find_aligned_magic(&scratch[..filled], MAGIC_ERD).ok_or_else(|| {
        debug!("LZOR: ERD magic not found");
        UnpackError::EmbeddedMagicNotFound
    })?;

    let data = embedded_payload(tail).inspect_err(|err| debug!("LZOR: {err}"))?;

    rle::decode(data, out)
        .inspect_err(|err| debug!("LZOR: RLE decoding error ({err})"))
        .map_err(Into::into)
}

/// Returns the bytes following the first 32-bit aligned occurrence of
/// `magic` in `data`.
fn find_aligned_magic(data: &[u8], magic: u32) -> Option<&[u8]> {
    let index = data
        .chunks_exact(MAGIC_SIZE)
        .position(|word| u32::from_le_bytes(word.try_into().unwrap()) == magic)?;

    Some(&data[(index + 1) * MAGIC_SIZE..])
}

fn embedded_payload(data: &[u8]) -> Result<&[u8], UnpackError> {
    let tag = tag::find(data, EMBEDDED_TAG_ID).map_err(|_| UnpackError::MissingEmbeddedTag)?;

    tag.payload(data).ok_or(UnpackError::InvalidLength {
        offset: tag.offset,
        len: tag.len,
        available: data.len(),
    })
}
