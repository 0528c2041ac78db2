use horgg_core::derive_substream_seed;

// Keeps the chain substream away from the call substreams 0, 1, 2, ...
const CHAIN_SALT: u64 = 0xA5A5_A5A5_A5A5_A5A5;

/// Derives the seed used by generation call `call_index`.
pub fn call_seed(master_seed: u64, call_index: u64) -> u64 {
    derive_substream_seed(master_seed, call_index)
}

/// Derives the seed of the persistent chain driven by single-step moves.
pub fn chain_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed ^ CHAIN_SALT, 0)
}
