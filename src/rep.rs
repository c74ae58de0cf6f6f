//! # Values representable as nouns.
//!
//! Everything a noun can say is said with atoms and pairs, so the
//! conventions here are the usual ones: unsigned integers are atoms,
//! [`Bytes`] and text are atoms holding their little-endian bytes,
//! sequences are zero-terminated lists of cells, and `Option` is the
//! atom `0` or the cell `[0 value]`. Signed integers and floats have no
//! canonical noun form and take an application-level convention instead.

use crate::{errors::NounConversionError, nat::Nat, Noun};
use bytes::Bytes;
use num_bigint::BigUint;
use std::convert::TryFrom;

/// A value representable as [`Noun`].
pub trait NounRep: Sized {
    /// Converts value into [`Noun`].
    ///
    /// # Example
    ///
    /// ```
    /// use njam::prelude::*;
    ///
    /// let n = 1u64.to_noun();
    /// ```
    fn to_noun(&self) -> Noun;

    /// Consumes value, converting it into [`Noun`].
    fn into_noun(self) -> Noun { self.to_noun() }

    /// Converts value from [`Noun`].
    ///
    /// # Arguments
    ///
    /// `n: &Noun` - The value to be converted from [`Noun`].
    ///
    /// # Example
    ///
    /// ```
    /// use njam::prelude::*;
    ///
    /// let n = 257u64.to_noun();
    ///
    /// // should be equal
    /// assert_eq!(u64::from_noun(&n).unwrap(), 257);
    /// ```
    fn from_noun(n: &Noun) -> Result<Self, NounConversionError>;
}

impl NounRep for Noun {
    fn to_noun(&self) -> Noun { self.clone() }

    fn into_noun(self) -> Noun { self }

    fn from_noun(n: &Noun) -> Result<Self, NounConversionError> { Ok(n.clone()) }
}

impl NounRep for Nat {
    fn to_noun(&self) -> Noun { Noun::Atom(self.clone()) }

    fn into_noun(self) -> Noun { Noun::Atom(self) }

    fn from_noun(n: &Noun) -> Result<Self, NounConversionError> {
        n.as_atom()
            .cloned()
            .ok_or_else(|| NounConversionError::new("Expected an atom, found a cell"))
    }
}

impl NounRep for BigUint {
    fn to_noun(&self) -> Noun { Noun::atom(self.clone()) }

    fn from_noun(n: &Noun) -> Result<Self, NounConversionError> {
        Nat::from_noun(n).map(BigUint::from)
    }
}

macro_rules! uint_rep {
    ($t:ty) => {
        impl NounRep for $t {
            fn to_noun(&self) -> Noun { Noun::from(*self) }

            fn from_noun(n: &Noun) -> Result<Self, NounConversionError> {
                let a = Nat::from_noun(n)?;
                <$t>::try_from(a)
                    .map_err(|_| NounConversionError::new("Atom does not fit the requested width"))
            }
        }
    };
}

uint_rep!(u8);
uint_rep!(u16);
uint_rep!(u32);
uint_rep!(u64);
uint_rep!(u128);
uint_rep!(usize);

impl NounRep for bool {
    fn to_noun(&self) -> Noun { Noun::atom(*self as u64) }

    fn from_noun(n: &Noun) -> Result<Self, NounConversionError> {
        match u64::from_noun(n)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(NounConversionError::new("Expected the atom 0 or 1")),
        }
    }
}

// Byte strings become atoms carrying their little-endian bytes. High zero
// bytes are not representable in an atom, so a trailing run of zeros does
// not survive the roundtrip.
impl NounRep for Bytes {
    fn to_noun(&self) -> Noun { Noun::atom_from_bytes(self) }

    fn from_noun(n: &Noun) -> Result<Self, NounConversionError> {
        Ok(Bytes::from(Nat::from_noun(n)?.to_le_bytes()))
    }
}

impl NounRep for String {
    fn to_noun(&self) -> Noun { Noun::atom_from_bytes(self.as_bytes()) }

    fn from_noun(n: &Noun) -> Result<Self, NounConversionError> {
        String::from_utf8(Nat::from_noun(n)?.to_le_bytes())
            .map_err(|_| NounConversionError::new("Atom is not valid UTF-8"))
    }
}

impl<T: NounRep> NounRep for Vec<T> {
    fn to_noun(&self) -> Noun {
        self.iter()
            .rev()
            .fold(Noun::atom(0u64), |tail, x| Noun::cell(x.to_noun(), tail))
    }

    fn from_noun(n: &Noun) -> Result<Self, NounConversionError> {
        let mut out = Vec::new();
        let mut cur = n;
        loop {
            match cur {
                Noun::Cell(h, t) => {
                    out.push(T::from_noun(h)?);
                    cur = t;
                }
                Noun::Atom(a) if a.is_zero() => return Ok(out),
                Noun::Atom(_) => {
                    return Err(NounConversionError::new(
                        "List does not end in the zero atom",
                    ));
                }
            }
        }
    }
}

impl<T: NounRep> NounRep for Option<T> {
    fn to_noun(&self) -> Noun {
        match self {
            None => Noun::atom(0u64),
            Some(x) => Noun::cell(Noun::atom(0u64), x.to_noun()),
        }
    }

    fn from_noun(n: &Noun) -> Result<Self, NounConversionError> {
        match n {
            Noun::Atom(a) if a.is_zero() => Ok(None),
            Noun::Cell(h, t) if h.is_zero() => Ok(Some(T::from_noun(t)?)),
            _ => Err(NounConversionError::new(
                "Expected the zero atom or a zero-headed cell",
            )),
        }
    }
}

impl<A: NounRep, B: NounRep> NounRep for (A, B) {
    fn to_noun(&self) -> Noun { Noun::cell(self.0.to_noun(), self.1.to_noun()) }

    fn from_noun(n: &Noun) -> Result<Self, NounConversionError> {
        let (h, t) = n
            .as_cell()
            .ok_or_else(|| NounConversionError::new("Expected a cell, found an atom"))?;
        Ok((A::from_noun(h)?, B::from_noun(t)?))
    }
}

impl<A: NounRep, B: NounRep, C: NounRep> NounRep for (A, B, C) {
    fn to_noun(&self) -> Noun {
        Noun::cell(
            self.0.to_noun(),
            Noun::cell(self.1.to_noun(), self.2.to_noun()),
        )
    }

    fn from_noun(n: &Noun) -> Result<Self, NounConversionError> {
        let (a, (b, c)) = <(A, (B, C))>::from_noun(n)?;
        Ok((a, b, c))
    }
}
