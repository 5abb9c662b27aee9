/// Hard cap on instance size: visit state is one 64-bit mask.
pub const MAX_CITIES: usize = 64;
pub const MIN_CITIES: usize = 2;

/// Largest instance the uncached exhaustive search finishes in tolerable time.
pub const MAX_CITIES_BRUTE_FORCE: usize = 13;
/// Largest instance whose `n * 2^n` memo table fits in memory.
pub const MAX_CITIES_DYN_PROG: usize = 22;

/// Generated cities live on a square grid with coordinates in `[0, GRID_SIZE)`.
pub const GRID_SIZE: i32 = 1_000;

pub const DEFAULT_CITY_COUNT: usize = 12;
pub const DEFAULT_START_CITY: usize = 0;
pub const DEFAULT_LOOKAHEAD: usize = 10;
pub const DEFAULT_SEED: u64 = 12_345;
