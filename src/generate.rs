//! Canonical benchmark functions.
//!
//! The generators walk the assignment space with [`BitSet::successor`]
//! instead of materializing the list of assignments.

use log::debug;
use rand::Rng;

use crate::bitset::BitSet;
use crate::error::TtError;
use crate::table::TruthTable;

/// Largest number of variables accepted by [`TruthTable::prime`].
pub const MAX_PRIME_VARS: usize = 10;

/// All primes below `2^MAX_PRIME_VARS`, in ascending order.
pub const PRIMES: [usize; 172] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53,
    59, 61, 67, 71, 73, 79, 83, 89, 97, 101, 103, 107, 109, 113, 127, 131,
    137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223,
    227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307, 311,
    313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409,
    419, 421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503,
    509, 521, 523, 541, 547, 557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613,
    617, 619, 631, 641, 643, 647, 653, 659, 661, 673, 677, 683, 691, 701, 709, 719,
    727, 733, 739, 743, 751, 757, 761, 769, 773, 787, 797, 809, 811, 821, 823, 827,
    829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911, 919, 929, 937, 941,
    947, 953, 967, 971, 977, 983, 991, 997, 1009, 1013, 1019, 1021,
];

impl TruthTable {
    /// Hidden weighted bit function.
    ///
    /// For an assignment `x` with `c = popcount(x)`, the output is bit `c - 1` of `x`.
    /// The all-zero assignment maps to false.
    pub fn hwb(num_vars: usize) -> Self {
        debug!("hwb({})", num_vars);
        let mut table = Self::new(num_vars);

        // Walk 1, 2, ..., 2^n - 1 until the counter wraps back to zero.
        let mut x = BitSet::from_value(num_vars, 1);
        while x.any() {
            let weight = x.count_ones();
            table.set(x.to_usize(), x.get(weight - 1));
            x.successor();
        }

        table
    }

    /// Majority function over an odd number of variables.
    ///
    /// The output is true iff strictly more than half of the inputs are set.
    pub fn maj(num_vars: usize) -> Result<Self, TtError> {
        debug!("maj({})", num_vars);
        if num_vars % 2 == 0 {
            return Err(TtError::InvalidArgument(format!(
                "argument to maj must be odd, got {}",
                num_vars
            )));
        }

        let mut table = Self::new(num_vars);
        let mut x = BitSet::new(num_vars);
        loop {
            table.set(x.to_usize(), x.count_ones() > num_vars / 2);
            if x.successor() {
                break;
            }
        }

        Ok(table)
    }

    /// Indicator function of prime assignments, for up to [`MAX_PRIME_VARS`] variables.
    pub fn prime(num_vars: usize) -> Result<Self, TtError> {
        debug!("prime({})", num_vars);
        if num_vars > MAX_PRIME_VARS {
            return Err(TtError::InvalidArgument(format!(
                "argument to prime cannot be larger than {}, got {}",
                MAX_PRIME_VARS, num_vars
            )));
        }

        let mut table = Self::new(num_vars);
        let len = table.len();
        for &p in PRIMES.iter().take_while(|&&p| p < len) {
            table.set(p, true);
        }

        Ok(table)
    }

    /// Generate a uniformly random Boolean function.
    pub fn random<R: Rng + ?Sized>(num_vars: usize, rng: &mut R) -> Self {
        debug!("random({})", num_vars);
        let mut table = Self::new(num_vars);
        for i in 0..table.len() {
            table.set(i, rng.random_bool(0.5));
        }
        table
    }
}
