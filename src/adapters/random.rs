use crate::utils::error::Result;
use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;

/// Process-local generator seeded once from the operating system.
///
/// Fails with `RandomSourceUnavailable` when the OS entropy source cannot be
/// read.
pub fn default_source() -> Result<StdRng> {
    let rng = StdRng::from_rng(OsRng)?;
    tracing::debug!("seeded process random source from OS entropy");
    Ok(rng)
}

/// Deterministic generator for reproducible runs.
pub fn seeded_source(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
