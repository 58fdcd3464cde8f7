use crate::core::{BitString, Policy, RandomSource, BIT_LENGTH};
use crate::utils::error::Result;
use std::io::Write;

/// Text printed in front of the generated bits.
pub const LABEL: &str = "128-bit binary sequence: ";

/// Draws 128 random bits from an injected source and prints them.
pub struct BitStringGenerator<R: RandomSource> {
    source: R,
    policy: Policy,
}

impl<R: RandomSource> BitStringGenerator<R> {
    pub fn new(source: R, policy: Policy) -> Self {
        Self { source, policy }
    }

    pub fn generate(&mut self) -> Result<BitString> {
        let bits = match self.policy {
            Policy::Wide => BitString::from_u128(self.source.next_u128()?),
            Policy::Bytewise => {
                let mut bytes = [0u8; BIT_LENGTH / 8];
                for byte in bytes.iter_mut() {
                    *byte = self.source.next_u8()?;
                }
                BitString::from_bytes(bytes)
            }
            Policy::Bitwise => {
                let mut value = 0u128;
                for i in 0..BIT_LENGTH {
                    if self.source.next_bit()? {
                        value |= 1 << i;
                    }
                }
                BitString::from_u128(value)
            }
        };

        tracing::debug!(
            policy = ?self.policy,
            ones = bits.count_ones(),
            "generated bit string"
        );
        Ok(bits)
    }

    /// Generates one sequence and writes the labelled line to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<BitString> {
        let bits = self.generate()?;
        writeln!(out, "{}", render(&bits))?;
        out.flush()?;
        Ok(bits)
    }

    pub fn run_stdout(&mut self) -> Result<BitString> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.run(&mut handle)
    }
}

pub fn render(bits: &BitString) -> String {
    format!("{}{}", LABEL, bits)
}
