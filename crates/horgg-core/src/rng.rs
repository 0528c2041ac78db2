//! Deterministic RNG wrapper, seed derivation and the process-wide seed source.

use std::hash::Hasher;
use std::sync::Mutex;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;

/// Deterministic RNG handle used by every randomized horgg routine.
///
/// The handle is a thin wrapper around `StdRng`. A master `seed: u64` is
/// either supplied by the caller or drawn from the process-wide source (see
/// [`set_seed`]). Substreams are derived by hashing `(master_seed, substream)`
/// with SipHash-1-3 under fixed zero keys, which is stable across platforms.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a handle for substream `substream` of `master_seed`.
    pub fn substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }

    /// Returns a mutable reference to the underlying RNG for advanced usage.
    pub fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}

#[derive(Debug, Clone, Copy)]
struct GlobalSeed {
    master: u64,
    issued: u64,
}

// Shared by every sampler built without an explicit seed. Only read at
// construction time.
static GLOBAL_SEED: Mutex<Option<GlobalSeed>> = Mutex::new(None);

/// Resets the process-wide seed source.
///
/// Samplers constructed afterwards without an explicit seed receive the
/// substreams `0, 1, 2, ...` of `value` in construction order, so replaying
/// the same sequence of constructions after the same `set_seed` call
/// reproduces the same graphs.
pub fn set_seed(value: u64) {
    let mut guard = GLOBAL_SEED.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(GlobalSeed {
        master: value,
        issued: 0,
    });
}

/// Draws the next master seed from the process-wide source.
///
/// Falls back to a wall-clock derived master when [`set_seed`] was never called.
pub fn next_global_seed() -> u64 {
    let mut guard = GLOBAL_SEED.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let state = guard.get_or_insert_with(|| GlobalSeed {
        master: clock_seed(),
        issued: 0,
    });
    let seed = derive_substream_seed(state.master, state.issued);
    state.issued += 1;
    seed
}

fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .map(|nanos| nanos as u64)
        .unwrap_or_else(|| now.timestamp() as u64)
}
