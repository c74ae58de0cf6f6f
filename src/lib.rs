//! # njam
//!
//! A serializer/deserializer pair for **nouns**, the data representation of
//! the Nock virtual machine. A noun is either an *atom* (a non-negative
//! integer of arbitrary size) or a *cell* (an ordered pair of two nouns).
//!
//! [`jam`] encodes a noun as a compact bit sequence, sharing repeated
//! subterms through back-references; [`cue`] decodes such a sequence back
//! into a noun.
//!
//! # Example
//!
//! ```
//! use njam::prelude::*;
//!
//! // the cell [1 2]
//! let noun = Noun::cell(1u64, 2u64);
//!
//! // encode it
//! let enc = jam(&noun);
//! assert_eq!(enc.as_ref(), [0x31, 0x12]);
//!
//! // Note: decoding returns a `Result`
//! let dec = cue(&enc).unwrap();
//!
//! // but they are equivalent
//! assert_eq!(dec, noun);
//! ```

#![allow(clippy::clone_on_copy)]

/// Noun binary encoder and decoder.
pub mod encoding;
/// Error types.
pub mod errors;
/// Atom payloads.
pub mod nat;
/// Prelude
pub mod prelude;
/// Types representable as `Noun`.
pub mod rep;
/// Helper functions.
pub mod util;

pub use bytes::Bytes;
pub use encoding::{cue, cue_unchecked, jam};
use nat::Nat;
use std::{fmt, rc::Rc};

#[derive(Eq, PartialEq, Clone, Hash, Debug)]
/// Noun types.
pub enum Noun {
    /// A non-negative integer of arbitrary size.
    Atom(Nat),
    /// An ordered pair of two nouns. The halves are reference-counted so
    /// that decoded back-references can share structure.
    Cell(Rc<Noun>, Rc<Noun>),
}

use Noun::*;

impl Noun {
    /// Constructs an atom from anything convertible to [`Nat`].
    ///
    /// # Example
    ///
    /// ```
    /// use njam::prelude::*;
    ///
    /// let one = Noun::atom(1u64);
    ///
    /// assert!(one.is_atom());
    /// ```
    pub fn atom<A: Into<Nat>>(a: A) -> Noun { Atom(a.into()) }

    /// Constructs a cell from a head and a tail.
    ///
    /// # Example
    ///
    /// ```
    /// use njam::prelude::*;
    ///
    /// let pair = Noun::cell(1u64, Noun::cell(2u64, 3u64));
    ///
    /// assert_eq!(format!("{}", pair), "[1 2 3]");
    /// ```
    pub fn cell<H: Into<Noun>, T: Into<Noun>>(head: H, tail: T) -> Noun {
        Cell(Rc::new(head.into()), Rc::new(tail.into()))
    }

    /// Constructs an atom from its minimum-byte little-endian
    /// representation. High zero bytes are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use njam::prelude::*;
    ///
    /// assert_eq!(Noun::atom_from_bytes(&[1, 1]), Noun::atom(257u64));
    /// assert_eq!(Noun::atom_from_bytes(&[1, 1, 0, 0]), Noun::atom(257u64));
    /// ```
    pub fn atom_from_bytes(bytes: &[u8]) -> Noun { Atom(Nat::from_le_bytes(bytes)) }

    /// Whether the noun is an atom.
    pub fn is_atom(&self) -> bool { matches!(self, Atom(_)) }

    /// Whether the noun is a cell.
    pub fn is_cell(&self) -> bool { matches!(self, Cell(..)) }

    /// Whether the noun is the atom `0`.
    pub fn is_zero(&self) -> bool { matches!(self, Atom(a) if a.is_zero()) }

    /// Borrows the payload of an atom. This will return `None` if the noun
    /// is a cell.
    pub fn as_atom(&self) -> Option<&Nat> {
        match self {
            Atom(a) => Some(a),
            Cell(..) => None,
        }
    }

    /// Borrows the halves of a cell. This will return `None` if the noun is
    /// an atom.
    ///
    /// # Example
    ///
    /// ```
    /// use njam::prelude::*;
    ///
    /// let pair = Noun::cell(1u64, 2u64);
    ///
    /// let (head, tail) = pair.as_cell().unwrap();
    ///
    /// assert_eq!(*head, Noun::atom(1u64));
    /// assert_eq!(*tail, Noun::atom(2u64));
    /// ```
    pub fn as_cell(&self) -> Option<(&Noun, &Noun)> {
        match self {
            Cell(h, t) => Some((h, t)),
            Atom(_) => None,
        }
    }

    /// Borrows the head of a cell, `None` for atoms.
    pub fn head(&self) -> Option<&Noun> { self.as_cell().map(|(h, _)| h) }

    /// Borrows the tail of a cell, `None` for atoms.
    pub fn tail(&self) -> Option<&Noun> { self.as_cell().map(|(_, t)| t) }
}

// From implementations

macro_rules! try_from_ctor {
    ($from:ty, $to:ty, $ctor:tt) => {
        impl std::convert::TryFrom<$from> for $to {
            type Error = $from;

            fn try_from(from: $from) -> Result<$to, $from> {
                match from {
                    $ctor(a) => Ok(a),
                    f => Err(f),
                }
            }
        }
    };
}

from_fn!(Noun, Nat, Atom);
try_from_ctor!(Noun, Nat, Atom);
from_fn!(Noun, (Noun, Noun), |p: (Noun, Noun)| Noun::cell(p.0, p.1));
from_fn!(Noun, &str, |s: &str| Noun::atom_from_bytes(s.as_bytes()));

compose_from!(Noun, Nat, u8);
compose_from!(Noun, Nat, u16);
compose_from!(Noun, Nat, u32);
compose_from!(Noun, Nat, u64);
compose_from!(Noun, Nat, u128);
compose_from!(Noun, Nat, usize);
compose_from!(Noun, Nat, num_bigint::BigUint);

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Atom(a) => write!(f, "{}", a),
            Cell(h, t) => {
                write!(f, "[{} ", h)?;
                let mut tail: &Noun = t;
                while let Cell(h2, t2) = tail {
                    write!(f, "{} ", h2)?;
                    tail = t2.as_ref();
                }
                write!(f, "{}]", tail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let n = Noun::cell(0u64, 257u64);

        assert!(n.is_cell());
        assert!(!n.is_atom());
        assert!(n.head().unwrap().is_zero());
        assert_eq!(n.tail().unwrap().as_atom(), Some(&Nat::from(257u64)));
        assert!(Noun::atom(0u64).is_zero());
        assert!(!Noun::atom(1u64).is_zero());
        assert_eq!(Noun::from("a"), Noun::atom(97u64));
    }

    #[test]
    fn display() {
        let n = Noun::cell(Noun::cell(1u64, 2u64), Noun::cell(3u64, 0u64));

        assert_eq!(format!("{}", n), "[[1 2] 3 0]");
    }
}
