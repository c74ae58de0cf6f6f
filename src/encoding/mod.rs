//! # Noun binary encoder and decoder
//!
//! Encode and decode functions for nouns.
//!
//! The wire format is a bit stream delivered in a byte envelope: stream bit
//! `i` is bit `i % 8` of byte `i / 8`, and whatever is left of the last
//! byte is zero padding. Each subterm starts with a tag, read from the low
//! end: a clear bit opens an atom, `1,0` opens a cell (head first, then
//! tail), and `1,1` opens a back-reference naming an earlier subterm by the
//! bit offset at which it began. Atom bodies carry a unary length-of-length
//! prefix, the bit length with its implicit high bit dropped, then the
//! value, all low bit first.
//!
//! # Example
//!
//! ```
//! use njam::prelude::*;
//!
//! // a cell whose halves are the same noun
//! let shared = Noun::cell(10u64, 10u64);
//!
//! // the tail is a back-reference to the head's bit offset
//! let enc = jam(&shared);
//! assert_eq!(enc.as_ref(), [0x41, 0x74, 0x12]);
//!
//! // Note: decoding returns a `Result`
//! let dec = cue(&enc).unwrap();
//! assert_eq!(dec, shared);
//! ```

use crate::{errors::DecodingError, nat::Nat, util::real_size, Noun};
use hashbrown::HashMap;
use std::convert::TryFrom;

pub mod ser;
pub use ser::*;
mod constants;
pub(crate) use constants::*;

/// A bit cursor over a byte string, hard-limited to the stream's
/// significant bits. Every read checks the limit.
pub(crate) struct BitReader<'a> {
    buf: &'a [u8],
    pos: u64,
    limit: u64,
}

impl<'a> BitReader<'a> {
    fn new(buf: &'a [u8], limit: u64) -> Self {
        BitReader { buf, pos: 0, limit }
    }

    /// Bits consumed so far.
    fn pos(&self) -> u64 { self.pos }

    fn read_bit(&mut self) -> Result<bool, DecodingError> {
        if self.pos >= self.limit {
            return Err(DecodingError::new(&format!(
                "Bit stream ended at offset {}",
                self.pos
            )));
        }
        let bit = self.buf[(self.pos >> 3) as usize] >> (self.pos & 7) & 1 == 1;
        self.pos += 1;
        Ok(bit)
    }

    /// Reads `count` bits into a `u64`, low bit first.
    fn read_bits(&mut self, count: u32) -> Result<u64, DecodingError> {
        debug_assert!(count <= 64);
        if self.limit - self.pos < u64::from(count) {
            return Err(DecodingError::new(&format!(
                "Requested {} bits, but only {} bits were left",
                count,
                self.limit - self.pos
            )));
        }
        let mut out = 0u64;
        for i in 0..count {
            if self.buf[(self.pos >> 3) as usize] >> (self.pos & 7) & 1 == 1 {
                out |= 1u64 << i;
            }
            self.pos += 1;
        }
        Ok(out)
    }

    /// Counts the zero bits before the unary terminator and consumes them,
    /// terminator included.
    fn count_zeros(&mut self) -> Result<u64, DecodingError> {
        let mut count = 0u64;
        loop {
            if self.read_bit().map_err(|_| {
                DecodingError::new("Bit stream ended before the unary terminator")
            })? {
                return Ok(count);
            }
            count += 1;
        }
    }
}

/// Reads the body of an atom encoding: the inverse of the emission in
/// [`ser`]. A bare terminator is the zero atom.
fn read_atom(r: &mut BitReader) -> Result<Nat, DecodingError> {
    let c = r.count_zeros()?;
    if c == 0 {
        return Ok(Nat::zero());
    }
    if c > 64 {
        return Err(DecodingError::new(&format!(
            "Length-of-length of {} bits describes an atom too wide to exist",
            c
        )));
    }
    let low = r.read_bits(c as u32 - 1)?;
    let len = low | 1u64 << (c - 1);
    read_value(r, len)
}

/// Reads `len` value bits, low bit first, into a canonical [`Nat`].
fn read_value(r: &mut BitReader, len: u64) -> Result<Nat, DecodingError> {
    if len <= 64 {
        return Ok(Nat::from(r.read_bits(len as u32)?));
    }
    if r.limit - r.pos < len {
        return Err(DecodingError::new(&format!(
            "Requested {} bits, but only {} bits were left",
            len,
            r.limit - r.pos
        )));
    }
    let mut digs = Vec::with_capacity(((len + 7) / 8) as usize);
    let mut left = len;
    while left >= 8 {
        digs.push(r.read_bits(8)? as u8);
        left -= 8;
    }
    if left > 0 {
        digs.push(r.read_bits(left as u32)? as u8);
    }
    Ok(Nat::from_le_bytes(&digs))
}

enum Frame {
    /// A cell tag was read; the head is being decoded.
    Head { start: u64 },
    /// The head is done; the tail is being decoded.
    Tail { start: u64, head: Noun },
}

/// Tries to decode a byte string into a [`Noun`].
///
/// Every subterm is recorded against the bit offset at which it began, and
/// a back-reference resolves to the subterm recorded at the offset it
/// names. The stream must contain exactly one noun: residual significant
/// bits after the root completes are an error, as is an empty stream.
///
/// # Arguments
///
/// * `bytes` - A byte string containing one binary encoded noun.
///
/// # Example
///
/// ```
/// use njam::prelude::*;
///
/// // the atom 0, whatever the padding
/// assert_eq!(cue(&[0x02]).unwrap(), Noun::atom(0u64));
/// assert_eq!(cue(&[0x02, 0x00, 0x00]).unwrap(), Noun::atom(0u64));
///
/// // Did the decoding succeed?
/// match cue(&[0x01]) {
///     Ok(_) => panic!("a lone cell tag is not a noun"),
///     Err(_e) => {}
/// }
/// ```
pub fn cue(bytes: &[u8]) -> Result<Noun, DecodingError> {
    let size = real_size(bytes);
    if size == 0 {
        return Err(DecodingError::new(
            "Byte string carries no significant bits",
        ));
    }
    let mut r = BitReader::new(bytes, size);
    let mut cache: HashMap<u64, Noun> = HashMap::new();
    let mut frames: Vec<Frame> = Vec::new();

    loop {
        let start = r.pos();
        let mut noun = if !r.read_bit()? {
            let a = Noun::Atom(read_atom(&mut r)?);
            cache.insert(start, a.clone());
            a
        } else if !r.read_bit()? {
            frames.push(Frame::Head { start });
            continue;
        } else {
            let offset = u64::try_from(read_atom(&mut r)?).map_err(|big| {
                DecodingError::new(&format!(
                    "Back-reference to offset {} which was never decoded",
                    big
                ))
            })?;
            match cache.get(&offset) {
                Some(n) => n.clone(),
                None => {
                    return Err(DecodingError::new(&format!(
                        "Back-reference to offset {} which was never decoded",
                        offset
                    )));
                }
            }
        };

        loop {
            match frames.pop() {
                None => {
                    if r.pos() != size {
                        return Err(DecodingError::new(&format!(
                            "Decoded a noun in {} bits but the stream holds {}",
                            r.pos(),
                            size
                        )));
                    }
                    return Ok(noun);
                }
                Some(Frame::Head { start }) => {
                    frames.push(Frame::Tail { start, head: noun });
                    break;
                }
                Some(Frame::Tail { start, head }) => {
                    noun = Noun::cell(head, noun);
                    cache.insert(start, noun.clone());
                }
            }
        }
    }
}

/// Decodes a byte string into a [`Noun`], panicking if decoding fails.
/// Intended for call sites that have already validated their input.
///
/// # Example
///
/// ```
/// use njam::prelude::*;
///
/// let noun = Noun::cell(1u64, 2u64);
///
/// assert_eq!(cue_unchecked(&jam(&noun)), noun);
/// ```
pub fn cue_unchecked(bytes: &[u8]) -> Noun {
    match cue(bytes) {
        Ok(n) => n,
        Err(e) => panic!("cue of pre-validated input failed: {}", e),
    }
}
