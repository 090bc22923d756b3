use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

// Fixed seed so repeated runs replay the same animation
const RANDOM_SEED: u64 = 271828;

pub fn new() -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(RANDOM_SEED)
}

pub fn with_seed(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
