//! # Atom payloads
//!
//! A [`Nat`] is a non-negative integer of arbitrary size. Values that fit
//! in a machine word are kept unboxed; anything wider is backed by a
//! [`BigUint`]. The wide variant is only ever constructed for values above
//! `u64::MAX`, so every value has exactly one representation and the
//! derived equality and hashing are structural.

use crate::{from_as, from_fn, util::u64_to_digits};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::{cmp::Ordering, convert::TryFrom, fmt};

/// [`Nat`]s are either [`u64`]s or [`BigUint`]s (i.e., big unsigned
/// integers).
#[derive(Eq, PartialEq, Clone, Hash, Debug)]
pub enum Nat {
    /// Small integer.
    ///
    /// # Example
    ///
    /// ```
    /// use njam::prelude::*;
    ///
    /// let small = Nat::from(1u32);
    /// ```
    N64(u64),
    /// Large integer.
    ///
    /// # Example
    ///
    /// ```
    /// use njam::prelude::*;
    ///
    /// let large = Nat::from(u128::from(u64::max_value()) + 1);
    ///
    /// assert!(large > Nat::from(u64::max_value()));
    /// ```
    Big(BigUint),
}

use Nat::*;

impl Nat {
    /// The atom `0`.
    pub const fn zero() -> Nat { N64(0) }

    /// Whether the value is `0`.
    pub fn is_zero(&self) -> bool { matches!(self, N64(0)) }

    /// The position of the highest set bit, plus one. `0` has bit length
    /// `0`; every other value has a unique minimal bit length.
    ///
    /// # Example
    ///
    /// ```
    /// use njam::nat::Nat;
    ///
    /// assert_eq!(Nat::zero().bit_len(), 0);
    /// assert_eq!(Nat::from(1u64).bit_len(), 1);
    /// assert_eq!(Nat::from(256u64).bit_len(), 9);
    /// ```
    pub fn bit_len(&self) -> u64 {
        match self {
            N64(u) => u64::from(64 - u.leading_zeros()),
            Big(b) => b.bits(),
        }
    }

    /// Converts the value to the smallest possible vec of digits in
    /// little-endian order. The digits of `0` are the empty vec.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match self {
            N64(0) => Vec::new(),
            N64(u) => u64_to_digits(*u),
            Big(b) => b.to_bytes_le(),
        }
    }

    /// Reads a value from digits in little-endian order, ignoring high zero
    /// bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use njam::nat::Nat;
    ///
    /// assert_eq!(Nat::from_le_bytes(&[1, 1]), Nat::from(257u64));
    /// assert_eq!(Nat::from_le_bytes(&[1, 1, 0]), Nat::from(257u64));
    /// assert_eq!(Nat::from_le_bytes(&[]), Nat::zero());
    /// ```
    pub fn from_le_bytes(bytes: &[u8]) -> Nat {
        let end = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
        let bytes = &bytes[..end];
        if bytes.len() <= 8 {
            let mut digs = [0u8; 8];
            digs[..bytes.len()].copy_from_slice(bytes);
            N64(u64::from_le_bytes(digs))
        } else {
            Big(BigUint::from_bytes_le(bytes))
        }
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            N64(u) => write!(f, "{}", u),
            Big(b) => write!(f, "{}", b),
        }
    }
}

impl PartialOrd for Nat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Nat {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (N64(a), N64(b)) => a.cmp(b),
            (Big(a), Big(b)) => a.cmp(b),
            (N64(a), Big(b)) => BigUint::from(*a).cmp(b),
            (Big(a), N64(b)) => a.cmp(&BigUint::from(*b)),
        }
    }
}

// From implementations

// u64 -> Nat
from_fn!(Nat, u64, N64);

// smaller unsigned -> Nat
from_as!(Nat, u8, u64);
from_as!(Nat, u16, u64);
from_as!(Nat, u32, u64);
from_as!(Nat, usize, u64);

// u128 -> Nat
from_fn!(Nat, u128, |u| {
    if u <= u128::from(u64::max_value()) {
        N64(u as u64)
    } else {
        Big(BigUint::from(u))
    }
});

// BigUint -> Nat
from_fn!(Nat, BigUint, |b: BigUint| {
    match b.to_u64() {
        Some(u) => N64(u),
        None => Big(b),
    }
});

// Nat -> BigUint
from_fn!(BigUint, Nat, |n: Nat| {
    match n {
        N64(u) => BigUint::from(u),
        Big(b) => b,
    }
});

// TryFrom implementations

impl TryFrom<Nat> for u64 {
    type Error = Nat;

    fn try_from(n: Nat) -> Result<Self, Nat> {
        match n {
            N64(u) => Ok(u),
            big => Err(big),
        }
    }
}

impl TryFrom<Nat> for u128 {
    type Error = Nat;

    fn try_from(n: Nat) -> Result<Self, Nat> {
        match n {
            N64(u) => Ok(u128::from(u)),
            Big(b) => {
                match b.to_u128() {
                    Some(u) => Ok(u),
                    None => Err(Big(b)),
                }
            }
        }
    }
}

macro_rules! try_from_nat {
    ($t:ty) => {
        impl TryFrom<Nat> for $t {
            type Error = Nat;

            fn try_from(n: Nat) -> Result<Self, Nat> {
                match u64::try_from(n) {
                    Ok(u) => <$t>::try_from(u).map_err(|_| Nat::from(u)),
                    Err(n) => Err(n),
                }
            }
        }
    };
}

try_from_nat!(u8);
try_from_nat!(u16);
try_from_nat!(u32);
try_from_nat!(usize);
