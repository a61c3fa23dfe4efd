//! # tt-rs: Truth tables of Boolean functions
//!
//! **`tt-rs`** represents an `n`-variable Boolean function as its truth table,
//! a bit sequence of length `2^n`, and provides the classic manipulations:
//! loading and printing tables in several textual forms, generating benchmark
//! functions, and changing the variable count or order.
//!
//! ## Bit order
//!
//! Entry `i` of a table is the value of the function under the assignment
//! where variable `j` equals `(i >> j) & 1`. Textual binary strings are
//! written most significant bit first, so the *last* character is entry 0:
//!
//! ```rust
//! use tt_rs::table::TruthTable;
//!
//! let f: TruthTable = "0110".parse().unwrap(); // x0 XOR x1
//! assert!(!f.get(0));
//! assert!(f.get(1));
//! assert!(f.get(2));
//! assert!(!f.get(3));
//! assert_eq!(f.to_string(), "0110");
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use rand::SeedableRng;
//! use tt_rs::command::{execute, log_entry, Action};
//! use tt_rs::store::Store;
//!
//! let mut store = Store::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//!
//! // 1. Generate a new function (pushes a new slot)
//! execute(&mut store, &Action::Maj(3), &mut rng).unwrap();
//! assert_eq!(log_entry(&store), Some(("tt", "11101000".to_string())));
//!
//! // 2. Transform it in place
//! execute(&mut store, &Action::Extend(4), &mut rng).unwrap();
//! assert_eq!(store.len(), 1);
//! assert_eq!(store.current().unwrap().num_vars(), 4);
//! ```
//!
//! ## Core Components
//!
//! - **[`bitset`]**: fixed-length bit sequences with binary counting
//!   ([`successor`][crate::bitset::BitSet::successor]).
//! - **[`table`]**: the [`TruthTable`][crate::table::TruthTable] type.
//! - **[`codec`]**: binary, hexadecimal and indexed decimal encodings.
//! - **[`generate`]**: HWB, MAJ, PRIME and random functions.
//! - **[`transform`]**: extend, shrink and permute variables.
//! - **[`store`]**: the versioned store with a current slot.
//! - **[`command`]**: validated actions against a store.

pub mod bitset;
pub mod codec;
pub mod command;
pub mod error;
pub mod generate;
pub mod store;
pub mod table;
pub mod transform;
