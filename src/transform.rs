//! Changing the variable count and the variable order of truth tables.

use log::debug;

use crate::table::TruthTable;

/// Swaps bits `i` and `j` of `x`.
fn swap_bits(x: usize, i: usize, j: usize) -> usize {
    if ((x >> i) ^ (x >> j)) & 1 == 1 {
        x ^ ((1 << i) | (1 << j))
    } else {
        x
    }
}

impl TruthTable {
    /// Grows the table to `num_vars` variables.
    ///
    /// The new variables do not influence the function: the value under an
    /// assignment of the larger domain is the old value under its low `n` bits.
    ///
    /// # Panics
    ///
    /// Panics if `num_vars` is smaller than the current number of variables.
    pub fn extend_to(&mut self, num_vars: usize) {
        debug!("extend_to({} -> {})", self.num_vars(), num_vars);
        assert!(
            num_vars >= self.num_vars(),
            "Cannot extend a table with {} variables to {} variables",
            self.num_vars(),
            num_vars
        );
        assert!(num_vars < usize::BITS as usize, "Too many variables: {}", num_vars);

        let old_len = self.len();
        let new_len = 1 << num_vars;
        let bits = self.bits_mut();
        bits.resize(new_len);
        for i in old_len..new_len {
            let value = bits.get(i & (old_len - 1));
            bits.set(i, value);
        }
    }

    /// Truncates the table to `num_vars` variables.
    ///
    /// Only the first `2^num_vars` entries are kept, which fixes the removed
    /// variables to 0.
    ///
    /// # Panics
    ///
    /// Panics if `num_vars` is larger than the current number of variables.
    pub fn shrink_to(&mut self, num_vars: usize) {
        debug!("shrink_to({} -> {})", self.num_vars(), num_vars);
        assert!(
            num_vars <= self.num_vars(),
            "Cannot shrink a table with {} variables to {} variables",
            self.num_vars(),
            num_vars
        );
        self.bits_mut().resize(1 << num_vars);
    }

    /// Returns the function with variables `i` and `j` exchanged.
    ///
    /// `t.permute(i, j).permute(i, j) == t` for any `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not a variable of this table.
    pub fn permute(&self, i: usize, j: usize) -> Self {
        debug!("permute({}, {})", i, j);
        let n = self.num_vars();
        assert!(i < n && j < n, "Variables {} and {} out of range for {} variables", i, j, n);

        if i == j {
            return self.clone();
        }

        let mut result = Self::new(n);
        for x in 0..self.len() {
            result.set(x, self.get(swap_bits(x, i, j)));
        }
        result
    }

    /// In-place form of [`TruthTable::permute`].
    pub fn swap_vars(&mut self, i: usize, j: usize) {
        *self = self.permute(i, j);
    }
}
