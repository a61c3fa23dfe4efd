//! End-to-end tests for truth table manipulation.
//!
//! Tests cover the textual encodings, the generators, the transformations and
//! the store protocol driven through the command layer.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tt_rs::command::{execute, log_entry, validate, Action};
use tt_rs::error::TtError;
use tt_rs::store::Store;
use tt_rs::table::TruthTable;

fn values(table: &TruthTable) -> Vec<bool> {
    (0..table.len()).map(|i| table.get(i)).collect()
}

fn run_all(actions: &[Action]) -> Result<Store<TruthTable>, TtError> {
    let mut store = Store::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for action in actions {
        execute(&mut store, action, &mut rng)?;
    }
    Ok(store)
}

// ─── Codec Tests ───────────────────────────────────────────────────────────────

#[test]
fn load_hex_literal() {
    let store = run_all(&[Action::Load("0x3".into())]).unwrap();
    let table = store.current().unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(values(table), vec![true, true, false, false]);
}

#[test]
fn load_indexed_decimal() {
    let store = run_all(&[Action::Load("0d2:3".into())]).unwrap();
    assert_eq!(values(store.current().unwrap()), vec![true, true, false, false]);
}

#[test]
fn all_encodings_agree() {
    let binary: TruthTable = "0110100110010110".parse().unwrap();
    let hex: TruthTable = "0x6996".parse().unwrap();
    let decimal: TruthTable = "0d4:27030".parse().unwrap();
    assert_eq!(binary, hex);
    assert_eq!(binary, decimal);
    assert_eq!(binary.to_hex_string(), "6996");
}

#[test]
fn codec_roundtrip_on_random_tables() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for n in 0..8 {
        let table = TruthTable::random(n, &mut rng);
        let binary: TruthTable = table.to_binary_string().parse().unwrap();
        assert_eq!(binary, table);
        if n >= 2 {
            let hex = TruthTable::from_hex_str(&table.to_hex_string()).unwrap();
            assert_eq!(hex, table);
        }
    }
}

// ─── Generator Tests ───────────────────────────────────────────────────────────

#[test]
fn generated_functions() {
    let store = run_all(&[Action::Hwb(4), Action::Maj(3), Action::Prime(4)]).unwrap();
    assert_eq!(store.len(), 3);

    let hwb = store.get(0).unwrap();
    assert_eq!(hwb.len(), 16);
    assert!(!hwb.get(0));

    let maj = store.get(1).unwrap();
    assert_eq!(values(maj), vec![false, false, false, true, false, true, true, true]);

    let prime = store.get(2).unwrap();
    assert_eq!(prime.iter_ones().collect::<Vec<_>>(), vec![2, 3, 5, 7, 11, 13]);
}

#[test]
fn prime_ten_bits() {
    let table = TruthTable::prime(10).unwrap();
    assert_eq!(table.count_ones(), 172);
    assert!(table.get(1021));
    assert!(!table.get(1023));
}

// ─── Transform Tests ───────────────────────────────────────────────────────────

#[test]
fn extended_variables_do_not_influence() {
    let mut table = TruthTable::hwb(3);
    let original = table.clone();
    table.extend_to(5);
    for x in 0..table.len() {
        assert_eq!(table.get(x), original.get(x & 0b111));
    }
}

#[test]
fn shrink_fixes_removed_variables_to_zero() {
    let mut table = TruthTable::maj(5).unwrap();
    let original = table.clone();
    table.shrink_to(3);
    for x in 0..8 {
        assert_eq!(table.get(x), original.get(x));
    }
}

#[test]
fn permute_matches_definition() {
    let table = TruthTable::hwb(4);
    let swapped = table.permute(1, 3);
    for x in 0..16usize {
        let b1 = (x >> 1) & 1;
        let b3 = (x >> 3) & 1;
        let y = (x & !0b1010) | (b1 << 3) | (b3 << 1);
        assert_eq!(swapped.get(x), table.get(y));
    }
}

// ─── Store Protocol Tests ──────────────────────────────────────────────────────

#[test]
fn history_is_kept() {
    let store = run_all(&[
        Action::Load("10".into()),
        Action::Extend(2),
        Action::Load("0x8".into()),
        Action::parse_swap("0,1").unwrap(),
    ])
    .unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get(0).unwrap().to_string(), "1010");
    // x0 AND x1 is symmetric
    assert_eq!(log_entry(&store), Some(("tt", "1000".to_string())));
}

#[test]
fn validation_runs_before_mutation() {
    let store = Store::new();
    assert_eq!(validate(&store, &Action::Extend(1)), Err(TtError::NoCurrentTable));
    assert!(validate(&store, &Action::Hwb(1)).is_ok());
    assert!(matches!(validate(&store, &Action::Maj(2)), Err(TtError::InvalidArgument(_))));
}

#[test]
fn failed_action_keeps_store() {
    let mut store = Store::new();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    execute(&mut store, &Action::Prime(3), &mut rng).unwrap();

    for bad in [
        Action::Load("0d3".into()),
        Action::Load("012".into()),
        Action::Maj(6),
        Action::Shrink(5),
    ] {
        assert!(execute(&mut store, &bad, &mut rng).is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.current(), Some(&TruthTable::prime(3).unwrap()));
    }
}

#[test]
fn error_messages() {
    assert_eq!(TtError::NoCurrentTable.to_string(), "no current truth table available");
    let err = "0d5".parse::<TruthTable>().unwrap_err();
    assert!(err.to_string().starts_with("Parse error"));
}
