//! Deterministic random number generation.
//!
//! RULE: Nothing in the engine may call any platform RNG.
//! The only non-scripted terms in the whole platform — recommendation
//! similarity, accuracy-metric jitter, and the chat fallback pick — draw
//! from DemoRng streams derived from the single master seed, so a run is
//! reproducible end to end.
//!
//! Each demo gets its own stream, seeded from (master_seed XOR slot
//! index). Adding a new slot never disturbs existing streams.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single demo.
pub struct DemoRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl DemoRng {
    /// Create a demo RNG from the master seed and a stable slot index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Pick one element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }
}

/// All demo RNGs for a single session, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_demo(&self, slot: DemoSlot) -> DemoRng {
        DemoRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable demo slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every demo's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum DemoSlot {
    Recommendation = 0,
    Metrics = 1,
    Chat = 2,
    // Add new demos here — append only.
}

impl DemoSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Recommendation => "recommendation",
            Self::Metrics => "metrics",
            Self::Chat => "chat",
        }
    }
}
