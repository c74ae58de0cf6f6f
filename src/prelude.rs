pub use crate::{
    cue, cue_unchecked,
    errors::{DecodingError, NounConversionError},
    jam,
    nat::Nat,
    rep::NounRep,
    util::real_size,
    Bytes, Noun,
};
pub use num_bigint::BigUint;
pub use std::convert::TryFrom;
