//! Safe LZO1X block decompressor.
//!
//! Decodes the classic LZO1X bitstream as produced by `lzo1x_1_compress`
//! and friends. Every read from the input and every write to the output is
//! bounds checked, malformed input results in an error and never panics.

use std::cmp::Ordering;
use thiserror::Error;

/// Largest distance reachable by an M2 match, M1 matches after a long
/// literal run start right past it.
const M2_MAX_OFFSET: usize = 0x0800;
/// Base distance of M4 matches.
const M4_BASE_OFFSET: usize = 0x4000;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LzoError {
    #[error("LZO input overrun")]
    InputOverrun,
    #[error("LZO output overrun")]
    OutputOverrun,
    #[error("LZO lookbehind overrun")]
    LookbehindOverrun,
    #[error("corrupt LZO end of stream marker")]
    Corrupt,
    /// The end of stream marker was found before the end of the input. The
    /// first `len` bytes of the output are fully decoded.
    #[error("LZO end of stream reached with {remaining} input bytes left")]
    InputNotConsumed { len: usize, remaining: usize },
}

/// Decompresses `input` into `out` and returns the number of bytes written.
pub fn decompress(input: &[u8], out: &mut [u8]) -> Result<usize, LzoError> {
    if input.len() < 3 {
        return Err(LzoError::InputOverrun);
    }

    let mut d = Decoder {
        input,
        out,
        ip: 0,
        op: 0,
    };

    // number of literals copied by the previous instruction, 4 standing for
    // "a long literal run", which changes the meaning of the next M1 match
    let mut state = 0;

    if input[0] > 17 {
        d.ip = 1;
        let run = (input[0] - 17) as usize;
        d.literals(run)?;
        state = run.min(4);
    }

    loop {
        let t = d.byte()? as usize;

        let (distance, len, next) = if t < 16 {
            match state {
                0 => {
                    let run = if t == 0 { d.length(15)? } else { t };
                    d.literals(run + 3)?;
                    state = 4;
                    continue;
                }
                1..=3 => {
                    let b = d.byte()? as usize;
                    (1 + (t >> 2) + (b << 2), 2, t & 3)
                }
                _ => {
                    let b = d.byte()? as usize;
                    (1 + M2_MAX_OFFSET + (t >> 2) + (b << 2), 3, t & 3)
                }
            }
        } else if t >= 64 {
            let b = d.byte()? as usize;
            (1 + ((t >> 2) & 7) + (b << 3), (t >> 5) + 1, t & 3)
        } else if t >= 32 {
            let len = match t & 31 {
                0 => d.length(31)?,
                n => n,
            } + 2;
            let v = d.le16()?;
            (1 + (v >> 2), len, v & 3)
        } else {
            let len = match t & 7 {
                0 => d.length(7)?,
                n => n,
            } + 2;
            let v = d.le16()?;
            let far = ((t & 8) << 11) + (v >> 2);
            if far == 0 {
                return d.finish(len);
            }
            (far + M4_BASE_OFFSET, len, v & 3)
        };

        d.copy_match(distance, len)?;
        d.literals(next)?;
        state = next;
    }
}

struct Decoder<'a, 'b> {
    input: &'a [u8],
    out: &'b mut [u8],
    ip: usize,
    op: usize,
}

impl Decoder<'_, '_> {
    fn byte(&mut self) -> Result<u8, LzoError> {
        let b = *self.input.get(self.ip).ok_or(LzoError::InputOverrun)?;
        self.ip += 1;
        Ok(b)
    }

    fn le16(&mut self) -> Result<usize, LzoError> {
        let lo = self.byte()? as usize;
        let hi = self.byte()? as usize;
        Ok(lo | (hi << 8))
    }

    /// Reads a zero-extended length: every zero byte adds 255, the first
    /// non-zero byte ends the sequence.
    fn length(&mut self, base: usize) -> Result<usize, LzoError> {
        let mut len = base;
        loop {
            match self.byte()? {
                0 => len = len.saturating_add(255),
                b => return Ok(len.saturating_add(b as usize)),
            }
        }
    }

    fn literals(&mut self, n: usize) -> Result<(), LzoError> {
        let src = self
            .input
            .get(self.ip..self.ip.saturating_add(n))
            .ok_or(LzoError::InputOverrun)?;
        self.out
            .get_mut(self.op..self.op.saturating_add(n))
            .ok_or(LzoError::OutputOverrun)?
            .copy_from_slice(src);
        self.ip += n;
        self.op += n;
        Ok(())
    }

    fn copy_match(&mut self, distance: usize, len: usize) -> Result<(), LzoError> {
        if distance > self.op {
            return Err(LzoError::LookbehindOverrun);
        }
        if len > self.out.len() - self.op {
            return Err(LzoError::OutputOverrun);
        }

        // source and destination may overlap, which repeats the last
        // `distance` bytes
        let src = self.op - distance;
        for i in 0..len {
            self.out[self.op + i] = self.out[src + i];
        }
        self.op += len;
        Ok(())
    }

    fn finish(&self, len: usize) -> Result<usize, LzoError> {
        if len != 3 {
            return Err(LzoError::Corrupt);
        }

        match self.ip.cmp(&self.input.len()) {
            Ordering::Equal => Ok(self.op),
            Ordering::Less => Err(LzoError::InputNotConsumed {
                len: self.op,
                remaining: self.input.len() - self.ip,
            }),
            Ordering::Greater => Err(LzoError::InputOverrun),
        }
    }
}

/// Produces a valid LZO1X stream that stores `data` as a single literal run.
#[cfg(test)]
pub(crate) fn compress_literals(data: &[u8]) -> Vec<u8> {
    let mut stream = Vec::new();
    match data.len() {
        0 => {}
        n @ 1..=238 => stream.push(17 + n as u8),
        n => {
            stream.push(0);
            let mut rem = n - 18;
            while rem > 255 {
                stream.push(0);
                rem -= 255;
            }
            stream.push(rem as u8);
        }
    }
    stream.extend_from_slice(data);
    stream.extend_from_slice(&EOF);
    stream
}

#[cfg(test)]
pub(crate) const EOF: [u8; 3] = [0x11, 0x00, 0x00];
