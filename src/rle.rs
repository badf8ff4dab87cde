//! RouterBOOT run-length decoder.
//!
//! Every run starts with a signed count byte. A negative count `-n` is
//! followed by `n` bytes copied verbatim, a positive count `n` by a single
//! byte repeated `n` times.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RleError {
    #[error("RLE input too short ({0} bytes)")]
    TooShort(usize),
    #[error("RLE input truncated at offset {offset}")]
    Truncated { offset: usize },
    #[error("RLE output exceeds capacity of {capacity} bytes")]
    OutputOverrun { capacity: usize },
}

/// Decodes `input` into `out` and returns the number of bytes written.
///
/// `out.len()` is the capacity: a run that does not fit fails the whole
/// decode, nothing is ever written past it.
pub fn decode(input: &[u8], out: &mut [u8]) -> Result<usize, RleError> {
    if input.len() < 2 {
        return Err(RleError::TooShort(input.len()));
    }

    let capacity = out.len();
    let mut ip = 0;
    let mut op = 0;

    while ip < input.len() {
        let count = input[ip] as i8;
        let offset = ip;
        ip += 1;

        if count < 0 {
            let run = count.unsigned_abs() as usize;
            let literals = input
                .get(ip..ip + run)
                .ok_or(RleError::Truncated { offset })?;
            out.get_mut(op..op + run)
                .ok_or(RleError::OutputOverrun { capacity })?
                .copy_from_slice(literals);
            ip += run;
            op += run;
        } else {
            let run = count as usize;
            let byte = *input.get(ip).ok_or(RleError::Truncated { offset })?;
            out.get_mut(op..op + run)
                .ok_or(RleError::OutputOverrun { capacity })?
                .fill(byte);
            ip += 1;
            op += run;
        }
    }

    Ok(op)
}
