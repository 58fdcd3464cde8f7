use crate::utils::error::{Result, SequenceError};
use crate::utils::validation::validate_bit_string;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of binary digits in every generated sequence.
pub const BIT_LENGTH: usize = 128;

/// Exactly [`BIT_LENGTH`] characters, each '0' or '1'.
///
/// Leading zeros are part of the value: a draw of `0` renders as 128 '0'
/// characters, never as a shorter string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BitString(String);

impl BitString {
    pub fn from_u128(value: u128) -> Self {
        Self(format!("{:0width$b}", value, width = BIT_LENGTH))
    }

    /// Concatenates the bytes in order, each as eight binary digits.
    pub fn from_bytes(bytes: [u8; BIT_LENGTH / 8]) -> Self {
        let mut out = String::with_capacity(BIT_LENGTH);
        for byte in bytes {
            out.push_str(&format!("{:08b}", byte));
        }
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count_ones(&self) -> usize {
        self.0.bytes().filter(|b| *b == b'1').count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for BitString {
    type Error = SequenceError;

    fn try_from(bits: &str) -> Result<Self> {
        validate_bit_string("bit string", bits)?;
        if bits.len() != BIT_LENGTH {
            return Err(SequenceError::ValidationError {
                message: format!(
                    "Expected {} binary digits, got {}",
                    BIT_LENGTH,
                    bits.len()
                ),
            });
        }
        Ok(Self(bits.to_string()))
    }
}

impl FromStr for BitString {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl<'de> Deserialize<'de> for BitString {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::try_from(raw.as_str()).map_err(serde::de::Error::custom)
    }
}

/// How the 128 bits are drawn from the random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// One 128-bit draw rendered in base 2 with zero padding.
    #[default]
    Wide,
    /// Sixteen 8-bit draws, concatenated in draw order.
    Bytewise,
    /// 128 single-bit draws; draw `i` sets bit `i`, printed most significant first.
    Bitwise,
}

impl FromStr for Policy {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "wide" => Ok(Policy::Wide),
            "bytewise" => Ok(Policy::Bytewise),
            "bitwise" => Ok(Policy::Bitwise),
            other => Err(SequenceError::InvalidConfigValueError {
                field: "policy".to_string(),
                value: other.to_string(),
                reason: "Valid policies: wide, bytewise, bitwise".to_string(),
            }),
        }
    }
}
