//! Fixed-length bit sequence used as the storage of truth tables.
//!
//! Bits are addressed by index, bit 0 being the least significant one.
//! The whole sequence can also be read as an unsigned number, which is what
//! [`BitSet::successor`] increments.

/// A fixed-length bit sequence backed by a vector of u64 words.
///
/// Bits beyond `len` in the last word are always kept clear, so the derived
/// equality and hashing compare lengths and contents only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of bits in the sequence
    len: usize,
}

impl BitSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates a bit sequence of the given length with all bits cleared.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; Self::num_words(len)],
            len,
        }
    }

    /// Creates a bit sequence of the given length with all bits set.
    pub fn ones(len: usize) -> Self {
        let mut bits = Self {
            words: vec![u64::MAX; Self::num_words(len)],
            len,
        };
        bits.trim();
        bits
    }

    /// Creates a bit sequence of the given length holding the low bits of `value`.
    ///
    /// Bits of `value` that do not fit into `len` are dropped.
    pub fn from_value(len: usize, value: u64) -> Self {
        let mut bits = Self::new(len);
        if let Some(word) = bits.words.first_mut() {
            *word = value;
        }
        bits.trim();
        bits
    }

    fn num_words(len: usize) -> usize {
        (len + Self::BITS_PER_WORD - 1) / Self::BITS_PER_WORD
    }

    /// Gets the word index and bit position for a given bit index.
    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        let word = index / Self::BITS_PER_WORD;
        let bit = index % Self::BITS_PER_WORD;
        (word, bit)
    }

    /// Clears the unused high bits of the last word.
    fn trim(&mut self) {
        let rest = self.len % Self::BITS_PER_WORD;
        if rest != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rest) - 1;
            }
        }
    }

    /// Returns the number of bits in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the sequence has no bits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value of the bit at the given index.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "Bit index {} out of range for length {}", index, self.len);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        (self.words[word_idx] >> bit_idx) & 1 == 1
    }

    /// Sets the bit at the given index to `value`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.len, "Bit index {} out of range for length {}", index, self.len);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let mask = 1u64 << bit_idx;
        if value {
            self.words[word_idx] |= mask;
        } else {
            self.words[word_idx] &= !mask;
        }
    }

    /// Returns the number of set bits (population count).
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if at least one bit is set.
    pub fn any(&self) -> bool {
        self.words.iter().any(|&w| w != 0)
    }

    /// Returns true if no bit is set.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Steps to the next bit pattern in binary counting order.
    ///
    /// The sequence is incremented as an unsigned number. The maximum value
    /// wraps around to the all-zero pattern, in which case `true` is returned.
    /// Enumerating a range of assignments is therefore a loop that stops as
    /// soon as `successor` reports the wrap.
    pub fn successor(&mut self) -> bool {
        for word in self.words.iter_mut() {
            let (next, carry) = word.overflowing_add(1);
            *word = next;
            if !carry {
                break;
            }
        }
        self.trim();
        self.none()
    }

    /// Interprets the sequence as an unsigned number.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is wider than 64 bits.
    pub fn to_u64(&self) -> u64 {
        assert!(
            self.len <= Self::BITS_PER_WORD,
            "Bit sequence of length {} does not fit into u64",
            self.len
        );
        self.words.first().copied().unwrap_or(0)
    }

    /// Interprets the sequence as an index (an unsigned number).
    pub fn to_usize(&self) -> usize {
        assert!(
            self.len <= usize::BITS as usize,
            "Bit sequence of length {} does not fit into usize",
            self.len
        );
        self.to_u64() as usize
    }

    /// Changes the length of the sequence.
    ///
    /// Bits added at the high end are cleared, bits beyond the new length are dropped.
    pub fn resize(&mut self, len: usize) {
        self.words.resize(Self::num_words(len), 0);
        self.len = len;
        self.trim();
    }

    /// Returns an iterator over all set bit indices, in ascending order.
    pub fn iter_ones(&self) -> BitSetIter<'_> {
        BitSetIter {
            bitset: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a BitSet.
pub struct BitSetIter<'a> {
    bitset: &'a BitSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitSet::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.bitset.words.len() {
                return None;
            }
            self.current_word = self.bitset.words[self.word_idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_new() {
        let bs = BitSet::new(100);
        assert_eq!(bs.len(), 100);
        assert!(!bs.any());
        assert!(bs.none());
        assert_eq!(bs.count_ones(), 0);
        assert!(BitSet::new(0).is_empty());
    }

    #[test]
    fn test_get_set() {
        let mut bs = BitSet::new(100);
        assert!(!bs.get(42));
        bs.set(42, true);
        assert!(bs.get(42));
        bs.set(42, true);
        assert_eq!(bs.count_ones(), 1);
        bs.set(42, false);
        assert!(!bs.get(42));
        assert!(bs.none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range() {
        let bs = BitSet::new(8);
        bs.get(8);
    }

    #[test]
    fn test_from_value() {
        let bs = BitSet::from_value(4, 0b1010);
        assert!(!bs.get(0));
        assert!(bs.get(1));
        assert!(!bs.get(2));
        assert!(bs.get(3));
        assert_eq!(bs.to_u64(), 10);

        // High bits are dropped
        let bs = BitSet::from_value(2, 0b111);
        assert_eq!(bs.to_u64(), 0b11);
        assert_eq!(BitSet::from_value(0, 1), BitSet::new(0));
    }

    #[test]
    fn test_ones() {
        let bs = BitSet::ones(70);
        assert_eq!(bs.count_ones(), 70);
        assert_eq!(BitSet::ones(3).to_u64(), 7);
    }

    #[test]
    fn test_successor_counts() {
        let mut bs = BitSet::new(3);
        for expected in 1..8 {
            assert!(!bs.successor());
            assert_eq!(bs.to_u64(), expected);
        }
        // 7 -> 0
        assert!(bs.successor());
        assert!(bs.none());
    }

    #[test]
    fn test_successor_carry_across_words() {
        let mut bs = BitSet::from_value(80, u64::MAX);
        assert!(!bs.successor());
        assert!(!bs.get(0));
        assert!(!bs.get(63));
        assert!(bs.get(64));
        assert_eq!(bs.count_ones(), 1);

        let mut bs = BitSet::ones(80);
        assert!(bs.successor());
        assert!(bs.none());
    }

    #[test]
    fn test_successor_empty() {
        let mut bs = BitSet::new(0);
        assert!(bs.successor());
        assert!(bs.none());
    }

    #[test]
    fn test_equality() {
        assert_eq!(BitSet::from_value(4, 5), BitSet::from_value(4, 5));
        assert_ne!(BitSet::from_value(4, 5), BitSet::from_value(8, 5));
        assert_ne!(BitSet::from_value(4, 5), BitSet::from_value(4, 6));
    }

    #[test]
    fn test_resize() {
        let mut bs = BitSet::ones(4);
        bs.resize(8);
        assert_eq!(bs.to_u64(), 0b0000_1111);
        bs.resize(2);
        assert_eq!(bs.to_u64(), 0b11);
        bs.resize(4);
        assert_eq!(bs.to_u64(), 0b0011);
    }

    #[test]
    fn test_iter_ones() {
        let mut bs = BitSet::new(100);
        bs.set(5, true);
        bs.set(10, true);
        bs.set(3, true);
        bs.set(64, true); // Second word
        bs.set(65, true);

        let indices: Vec<_> = bs.iter_ones().collect();
        assert_eq!(indices, vec![3, 5, 10, 64, 65]);
    }
}
