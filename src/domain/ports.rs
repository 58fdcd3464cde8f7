use crate::utils::error::Result;
use rand::RngCore;

/// Source of random bytes for sequence generation.
///
/// Every `rand::RngCore` is a `RandomSource`, so tests can hand in a seeded
/// or mock generator in place of the process one.
pub trait RandomSource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;

    fn next_u128(&mut self) -> Result<u128> {
        let mut buf = [0u8; 16];
        self.fill(&mut buf)?;
        Ok(u128::from_be_bytes(buf))
    }

    fn next_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf)?;
        Ok(buf[0])
    }

    fn next_bit(&mut self) -> Result<bool> {
        Ok(self.next_u8()? & 1 == 1)
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.try_fill_bytes(dest)?;
        Ok(())
    }
}
