//! Textual encodings of truth tables.
//!
//! # Formats
//!
//! ```text
//! 0110          binary, most significant bit first (last character is bit 0)
//! 0x6           hexadecimal, each digit widened to four binary digits
//! 0d2:6         indexed decimal, <variables>:<unsigned value>
//! ```
//!
//! All three examples above denote the same 2-variable function, which is
//! true exactly for assignments 1 and 2.

use std::fmt;
use std::str::FromStr;

use log::debug;
use num_bigint::BigUint;

use crate::bitset::BitSet;
use crate::error::TtError;
use crate::table::TruthTable;

impl TruthTable {
    /// Parses a binary string, most significant bit first.
    ///
    /// The length of the string must be a power of two.
    pub fn from_binary_str(s: &str) -> Result<Self, TtError> {
        let len = s.len();
        if !len.is_power_of_two() {
            return Err(TtError::Parse(format!(
                "Truth table length must be a power of two, got {} in {:?}",
                len, s
            )));
        }

        let mut bits = BitSet::new(len);
        for (pos, c) in s.chars().enumerate() {
            let index = len - 1 - pos;
            match c {
                '0' => {}
                '1' => bits.set(index, true),
                _ => {
                    return Err(TtError::Parse(format!(
                        "Invalid binary digit {:?} at position {} in {:?}",
                        c, pos, s
                    )))
                }
            }
        }

        Ok(Self::from_bits(bits))
    }

    /// Parses a hexadecimal string (without the `0x` prefix).
    ///
    /// The string is widened to binary first, four bits per digit.
    pub fn from_hex_str(s: &str) -> Result<Self, TtError> {
        let mut binary = String::with_capacity(s.len() * 4);
        for c in s.chars() {
            let digit = c.to_digit(16).ok_or_else(|| {
                TtError::Parse(format!("Invalid hexadecimal digit {:?} in {:?}", c, s))
            })?;
            binary.push_str(&format!("{:04b}", digit));
        }
        Self::from_binary_str(&binary)
    }

    /// Parses the indexed decimal form `<variables>:<value>` (without the `0d` prefix).
    ///
    /// The value is an arbitrary precision unsigned number. Bits that do not
    /// fit into the `2^variables` entries of the table are dropped.
    pub fn from_indexed_str(s: &str) -> Result<Self, TtError> {
        let (vars, value) = s
            .split_once(':')
            .ok_or_else(|| TtError::Parse(format!("Missing ':' separator in {:?}", s)))?;

        let num_vars: usize = vars
            .parse()
            .map_err(|e| TtError::Parse(format!("Invalid number of variables {:?}: {}", vars, e)))?;
        if num_vars >= usize::BITS as usize {
            return Err(TtError::Parse(format!("Too many variables: {}", num_vars)));
        }
        let value: BigUint = value
            .parse()
            .map_err(|e| TtError::Parse(format!("Invalid value {:?}: {}", value, e)))?;

        let mut table = Self::new(num_vars);
        let width = (value.bits() as usize).min(table.len());
        for i in 0..width {
            table.set(i, value.bit(i as u64));
        }
        Ok(table)
    }

    /// Binary string, most significant bit first.
    pub fn to_binary_string(&self) -> String {
        (0..self.len()).rev().map(|i| if self.get(i) { '1' } else { '0' }).collect()
    }

    /// Hexadecimal string (without prefix), lowercase.
    ///
    /// Tables with fewer than four entries are padded with leading zero bits
    /// to a single digit, so `from_hex_str(&t.to_hex_string()) == t` only holds
    /// when `t.num_vars() >= 2`.
    pub fn to_hex_string(&self) -> String {
        let num_digits = (self.len() + 3) / 4;
        (0..num_digits)
            .rev()
            .map(|d| {
                let nibble = (0..4)
                    .filter(|&k| 4 * d + k < self.len() && self.get(4 * d + k))
                    .fold(0u32, |acc, k| acc | (1 << k));
                std::char::from_digit(nibble, 16).unwrap_or('0')
            })
            .collect()
    }
}

impl FromStr for TruthTable {
    type Err = TtError;

    /// Parses any of the supported encodings, dispatching on the `0x` and `0d` prefixes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!("parse({:?})", s);
        if let Some(hex) = s.strip_prefix("0x") {
            Self::from_hex_str(hex)
        } else if let Some(indexed) = s.strip_prefix("0d") {
            Self::from_indexed_str(indexed)
        } else {
            Self::from_binary_str(s)
        }
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_binary_string())
    }
}
