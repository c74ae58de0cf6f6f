use std::{error::Error, fmt};

#[derive(Debug, Clone, Default)]
pub struct DecodingError(pub String);

impl DecodingError {
    pub fn new(s: &str) -> Self { DecodingError(s.to_string()) }
}

impl Error for DecodingError {}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Decoding failed with error: {}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NounConversionError(pub String);

impl NounConversionError {
    pub fn new(s: &str) -> Self { NounConversionError(s.to_string()) }
}

impl Error for NounConversionError {}

impl fmt::Display for NounConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Conversion failed with error: {}", self.0)
    }
}
