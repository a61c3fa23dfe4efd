//! Truth tables of Boolean functions.
//!
//! A Boolean function `f: {0,1}^n → {0,1}` is represented by its truth table,
//! a sequence of `2^n` bits indexed by the input assignments.

use crate::bitset::{BitSet, BitSetIter};

/// A truth table for a Boolean function on `n` variables.
///
/// Bit `i` is the value of `f` under the assignment where variable `j` equals `(i >> j) & 1`.
///
/// # Invariants
///
/// - The length is always a power of two, `2^n`
/// - `n = 0` is allowed: the table then holds a single constant bit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    bits: BitSet,
}

impl TruthTable {
    /// Creates the constant zero function on `num_vars` variables.
    pub fn new(num_vars: usize) -> Self {
        assert!(
            num_vars < usize::BITS as usize,
            "Too many variables for a truth table: {}",
            num_vars
        );
        Self {
            bits: BitSet::new(1 << num_vars),
        }
    }

    /// Creates the constant one function on `num_vars` variables.
    pub fn one(num_vars: usize) -> Self {
        let mut table = Self::new(num_vars);
        table.bits = BitSet::ones(table.len());
        table
    }

    /// Wraps a bit sequence whose length is a power of two.
    ///
    /// # Panics
    ///
    /// Panics if the length of `bits` is not a power of two.
    pub fn from_bits(bits: BitSet) -> Self {
        assert!(
            bits.len().is_power_of_two(),
            "Truth table length must be a power of two, got {}",
            bits.len()
        );
        Self { bits }
    }

    /// Number of variables `n`.
    pub fn num_vars(&self) -> usize {
        self.bits.len().trailing_zeros() as usize
    }

    /// Number of entries, `2^n`.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false: a truth table has at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value of the function under the given assignment.
    pub fn get(&self, assignment: usize) -> bool {
        self.bits.get(assignment)
    }

    /// Sets the value of the function under the given assignment.
    pub fn set(&mut self, assignment: usize, value: bool) {
        self.bits.set(assignment, value)
    }

    /// Number of satisfying assignments.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Returns true if the function is satisfiable.
    pub fn any(&self) -> bool {
        self.bits.any()
    }

    /// Check if this is the constant zero function.
    pub fn is_zero(&self) -> bool {
        self.bits.none()
    }

    /// Check if this is the constant one function.
    pub fn is_one(&self) -> bool {
        self.count_ones() == self.len()
    }

    /// Satisfying assignments, in ascending order.
    pub fn iter_ones(&self) -> BitSetIter<'_> {
        self.bits.iter_ones()
    }

    pub fn bits(&self) -> &BitSet {
        &self.bits
    }
    pub fn into_bits(self) -> BitSet {
        self.bits
    }
    pub(crate) fn bits_mut(&mut self) -> &mut BitSet {
        &mut self.bits
    }
}

impl Default for TruthTable {
    /// The constant zero function on zero variables.
    fn default() -> Self {
        Self::new(0)
    }
}
