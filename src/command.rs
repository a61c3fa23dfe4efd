//! The `tt` command: one action against a store of truth tables.
//!
//! Actions that produce a brand-new function (`load`, `random`, `hwb`, `maj`,
//! `prime`) push a new slot into the store. Transformations (`extend`,
//! `shrink`, `swap`) replace the current table in place.
//!
//! Every action is validated before the store is touched, so a failed
//! action leaves the store exactly as it was.

use std::fmt;

use log::info;
use rand::Rng;

use crate::error::TtError;
use crate::generate::MAX_PRIME_VARS;
use crate::store::Store;
use crate::table::TruthTable;

/// A single truth table action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Load a table in binary, `0x` hexadecimal or `0d<bits>:<value>` form.
    Load(String),
    /// Uniformly random function over the given number of variables.
    Random(usize),
    /// Hidden weighted bit function.
    Hwb(usize),
    /// Majority function, odd number of variables only.
    Maj(usize),
    /// Prime indicator function, up to 10 variables.
    Prime(usize),
    /// Extend the current table to the given number of variables.
    Extend(usize),
    /// Shrink the current table to the given number of variables.
    Shrink(usize),
    /// Swap two variables of the current table.
    Swap(usize, usize),
}

impl Action {
    /// Returns true if the action pushes a new table instead of transforming the current one.
    pub fn creates_table(&self) -> bool {
        matches!(
            self,
            Action::Load(_) | Action::Random(_) | Action::Hwb(_) | Action::Maj(_) | Action::Prime(_)
        )
    }

    /// Parses the argument of a swap, two variables separated with a comma (e.g. `2,3`).
    pub fn parse_swap(s: &str) -> Result<Action, TtError> {
        let (i, j) = s
            .split_once(',')
            .ok_or_else(|| {
                TtError::Parse(format!(
                    "Expected two variables separated with a comma, got {:?}",
                    s
                ))
            })?;
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|e| TtError::Parse(format!("Invalid variable {:?}: {}", v, e)))
        };
        Ok(Action::Swap(parse(i)?, parse(j)?))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Load(text) => write!(f, "load {}", text),
            Action::Random(n) => write!(f, "random {}", n),
            Action::Hwb(n) => write!(f, "hwb {}", n),
            Action::Maj(n) => write!(f, "maj {}", n),
            Action::Prime(n) => write!(f, "prime {}", n),
            Action::Extend(n) => write!(f, "extend {}", n),
            Action::Shrink(n) => write!(f, "shrink {}", n),
            Action::Swap(i, j) => write!(f, "swap {},{}", i, j),
        }
    }
}

/// Checks that `action` can run against `store`.
pub fn validate(store: &Store<TruthTable>, action: &Action) -> Result<(), TtError> {
    match *action {
        Action::Random(n) | Action::Hwb(n) | Action::Maj(n) if n >= usize::BITS as usize => {
            return Err(TtError::InvalidArgument(format!(
                "too many variables for a truth table: {}",
                n
            )));
        }
        Action::Maj(n) if n % 2 == 0 => {
            return Err(TtError::InvalidArgument(format!("argument to maj must be odd, got {}", n)));
        }
        Action::Prime(n) if n > MAX_PRIME_VARS => {
            return Err(TtError::InvalidArgument(format!(
                "argument to prime cannot be larger than {}, got {}",
                MAX_PRIME_VARS, n
            )));
        }
        _ => {}
    }

    if action.creates_table() {
        return Ok(());
    }

    let table = store.current().ok_or(TtError::NoCurrentTable)?;
    let num_vars = table.num_vars();
    match *action {
        Action::Extend(n) if n < num_vars => Err(TtError::Precondition(format!(
            "cannot extend a table with {} variables to {} variables",
            num_vars, n
        ))),
        Action::Extend(n) if n >= usize::BITS as usize => {
            Err(TtError::Precondition(format!("cannot extend to {} variables", n)))
        }
        Action::Shrink(n) if n > num_vars => Err(TtError::Precondition(format!(
            "cannot shrink a table with {} variables to {} variables",
            num_vars, n
        ))),
        Action::Swap(i, j) if i >= num_vars || j >= num_vars => Err(TtError::Precondition(format!(
            "cannot swap variables {} and {} of a table with {} variables",
            i, j, num_vars
        ))),
        _ => Ok(()),
    }
}

/// Runs `action` against `store`.
///
/// The random generator is only used by [`Action::Random`].
pub fn execute<R: Rng + ?Sized>(
    store: &mut Store<TruthTable>,
    action: &Action,
    rng: &mut R,
) -> Result<(), TtError> {
    info!("tt: {}", action);
    validate(store, action)?;

    // New functions are built completely before a slot is added.
    let table = match action {
        Action::Load(text) => text.parse::<TruthTable>()?,
        Action::Random(n) => TruthTable::random(*n, rng),
        Action::Hwb(n) => TruthTable::hwb(*n),
        Action::Maj(n) => TruthTable::maj(*n)?,
        Action::Prime(n) => TruthTable::prime(*n)?,
        _ => {
            transform(store, action)?;
            return Ok(());
        }
    };
    *store.extend() = table;

    Ok(())
}

fn transform(store: &mut Store<TruthTable>, action: &Action) -> Result<(), TtError> {
    match action {
        Action::Extend(n) => {
            current_mut(store)?.extend_to(*n);
        }
        Action::Shrink(n) => {
            current_mut(store)?.shrink_to(*n);
        }
        Action::Swap(i, j) => {
            current_mut(store)?.swap_vars(*i, *j);
        }
        _ => unreachable!("{} creates a new table", action),
    }

    Ok(())
}

fn current_mut(store: &mut Store<TruthTable>) -> Result<&mut TruthTable, TtError> {
    store.current_mut().ok_or(TtError::NoCurrentTable)
}

/// Log entry for the current table: `("tt", <binary string>)`, or `None` for an empty store.
pub fn log_entry(store: &Store<TruthTable>) -> Option<(&'static str, String)> {
    store.current().map(|table| ("tt", table.to_binary_string()))
}
