//! Seed derivation for per-slot random streams.
//!
//! Every (series, column) slot owns two generators: one driving its
//! distribution and one deciding nulls. Both are seeded from the master
//! seed and the slot position only, so the same seed always reproduces the
//! same output regardless of how far other slots have advanced.

use rand::rngs::StdRng;
use rand::SeedableRng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Combine the master seed with a stream number.
fn derive_seed(master: u64, stream: u64) -> u64 {
    master.wrapping_add(stream.wrapping_mul(GOLDEN_GAMMA))
}

/// The two generators of one slot: `(distribution, nulls)`.
pub fn slot_rngs(master: u64, series: usize, column: usize, columns: usize) -> (StdRng, StdRng) {
    let slot = (series as u64)
        .wrapping_mul(columns as u64)
        .wrapping_add(column as u64);
    let base = slot.wrapping_mul(2).wrapping_add(1);
    (
        StdRng::seed_from_u64(derive_seed(master, base)),
        StdRng::seed_from_u64(derive_seed(master, base.wrapping_add(1))),
    )
}

/// Fresh master seed from OS entropy.
pub fn entropy_seed() -> u64 {
    rand::random()
}
