// tests/proptest.rs

#![cfg(test)]

use bool_vec::{BoolVec, BoolVecError};
use proptest::prelude::*;

fn to_vec(bits: &BoolVec) -> Vec<bool> {
    (0..bits.len()).map(|i| bits.get(i).unwrap()).collect()
}

#[derive(Clone, Debug)]
enum Op {
    Push(bool),
    Set(usize, bool),
    Insert(usize, bool),
    Erase(usize),
    Toggle(usize),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<bool>().prop_map(Op::Push),
        1 => (any::<usize>(), any::<bool>()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => (any::<usize>(), any::<bool>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => any::<usize>().prop_map(Op::Toggle),
        1 => Just(Op::Pop),
    ]
}

//
// -----------------------------------------------------------------------------
// Basic Operations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_push_and_get_roundtrip(values in prop::collection::vec(any::<bool>(), 0..1000)) {
        let mut bits = BoolVec::new();

        for &v in &values {
            bits.push(v);
        }

        prop_assert_eq!(bits.len(), values.len());

        for (i, &expected) in values.iter().enumerate() {
            prop_assert_eq!(bits.get(i), Ok(expected));
            prop_assert_eq!(bits[i], expected);
        }
    }
}

proptest! {
    #[test]
    fn prop_set_updates_correctly(
        values in prop::collection::vec(any::<bool>(), 1..200),
        update_idx in 0usize..200,
        new_val in any::<bool>()
    ) {
        let mut bits: BoolVec = values.iter().copied().collect();

        let idx = update_idx % values.len();
        bits.set(idx, new_val).unwrap();
        prop_assert_eq!(bits.get(idx), Ok(new_val));

        for (i, &expected) in values.iter().enumerate() {
            if i != idx {
                prop_assert_eq!(bits.get(i), Ok(expected));
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_handle_write_matches_set(
        values in prop::collection::vec(any::<bool>(), 1..200),
        idx in 0usize..200,
        new_val in any::<bool>()
    ) {
        let mut via_handle: BoolVec = values.iter().copied().collect();
        let mut via_set = via_handle.clone();
        let idx = idx % values.len();

        let old = via_handle.get_mut(idx).unwrap().replace(new_val);
        via_set.set(idx, new_val).unwrap();

        prop_assert_eq!(old, values[idx]);
        prop_assert_eq!(via_handle, via_set);
    }
}

proptest! {
    #[test]
    fn prop_reads_are_idempotent(values in prop::collection::vec(any::<bool>(), 1..100)) {
        let bits: BoolVec = values.iter().copied().collect();
        let bytes = bits.as_bytes().to_vec();

        for i in 0..bits.len() {
            let first = bits.get(i);
            prop_assert_eq!(bits.get(i), first);
        }
        prop_assert_eq!(bits.len(), values.len());
        prop_assert_eq!(bits.as_bytes(), &bytes[..]);
    }
}

//
// -----------------------------------------------------------------------------
// Insert / Erase
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_insert_then_erase_restores(
        values in prop::collection::vec(any::<bool>(), 0..200),
        idx in 0usize..201,
        v in any::<bool>()
    ) {
        let mut bits: BoolVec = values.iter().copied().collect();
        let idx = idx % (values.len() + 1);

        bits.insert(idx, v).unwrap();
        prop_assert_eq!(bits.len(), values.len() + 1);
        prop_assert_eq!(bits.get(idx), Ok(v));

        prop_assert_eq!(bits.erase(idx), Ok(v));
        prop_assert_eq!(to_vec(&bits), values.clone());
        prop_assert_eq!(bits.byte_len(), values.len().div_ceil(8));
    }
}

proptest! {
    #[test]
    fn prop_insert_matches_vec(
        values in prop::collection::vec(any::<bool>(), 0..200),
        idx in 0usize..201,
        v in any::<bool>()
    ) {
        let mut bits: BoolVec = values.iter().copied().collect();
        let mut model = values.clone();
        let idx = idx % (values.len() + 1);

        bits.insert(idx, v).unwrap();
        model.insert(idx, v);
        prop_assert_eq!(to_vec(&bits), model);
    }
}

proptest! {
    #[test]
    fn prop_erase_matches_vec(
        values in prop::collection::vec(any::<bool>(), 1..200),
        idx in 0usize..200
    ) {
        let mut bits: BoolVec = values.iter().copied().collect();
        let mut model = values.clone();
        let idx = idx % values.len();

        prop_assert_eq!(bits.erase(idx), Ok(model.remove(idx)));
        prop_assert_eq!(to_vec(&bits), model);
    }
}

//
// -----------------------------------------------------------------------------
// Bounds
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_out_of_range_is_rejected_without_change(
        values in prop::collection::vec(any::<bool>(), 0..100),
        extra in 0usize..10
    ) {
        let mut bits: BoolVec = values.iter().copied().collect();
        let before = bits.clone();
        let n = values.len();
        let past = n + extra;

        prop_assert_eq!(bits.get(past), Err(BoolVecError::IndexOutOfRange(past, n)));
        prop_assert!(bits.get_mut(past).is_err());
        prop_assert_eq!(bits.set(past, true), Err(BoolVecError::IndexOutOfRange(past, n)));
        prop_assert_eq!(bits.erase(past), Err(BoolVecError::IndexOutOfRange(past, n)));
        prop_assert_eq!(
            bits.insert(past + 1, true),
            Err(BoolVecError::IndexOutOfRange(past + 1, n))
        );
        prop_assert_eq!(&bits, &before);

        prop_assert!(bits.insert(n, true).is_ok());
        prop_assert_eq!(bits.len(), n + 1);
    }
}

//
// -----------------------------------------------------------------------------
// Model-based sequences and the storage invariant
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_random_ops_match_vec(ops in prop::collection::vec(op_strategy(), 0..300)) {
        let mut bits = BoolVec::new();
        let mut model: Vec<bool> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    bits.push(v);
                    model.push(v);
                }
                Op::Set(i, v) => {
                    if model.is_empty() {
                        prop_assert!(bits.set(i, v).is_err());
                    } else {
                        let i = i % model.len();
                        bits.set(i, v).unwrap();
                        model[i] = v;
                    }
                }
                Op::Insert(i, v) => {
                    let i = i % (model.len() + 1);
                    bits.insert(i, v).unwrap();
                    model.insert(i, v);
                }
                Op::Erase(i) => {
                    if model.is_empty() {
                        prop_assert!(bits.erase(i).is_err());
                    } else {
                        let i = i % model.len();
                        prop_assert_eq!(bits.erase(i), Ok(model.remove(i)));
                    }
                }
                Op::Toggle(i) => {
                    if !model.is_empty() {
                        let i = i % model.len();
                        model[i] = !model[i];
                        prop_assert_eq!(bits.toggle(i), Ok(model[i]));
                    }
                }
                Op::Pop => {
                    prop_assert_eq!(bits.pop(), model.pop());
                }
            }

            prop_assert_eq!(bits.len(), model.len());
            prop_assert_eq!(bits.byte_len(), model.len().div_ceil(8));
        }

        prop_assert_eq!(to_vec(&bits), model.clone());
        prop_assert_eq!(format!("{:#}", bits).len(), model.len());
    }
}

proptest! {
    #[test]
    fn prop_capacity_grows_appropriately(count in 0usize..500) {
        let mut bits = BoolVec::with_capacity(count / 2);

        for i in 0..count {
            bits.push(i % 2 == 0);
            prop_assert!(bits.capacity() >= bits.len());
            prop_assert_eq!(bits.byte_len(), bits.len().div_ceil(8));
        }
    }
}

proptest! {
    #[test]
    fn prop_with_capacity_preallocates(capacity in 10usize..500) {
        let bits = BoolVec::with_capacity(capacity);
        prop_assert!(bits.capacity() >= capacity);
        prop_assert_eq!(bits.len(), 0);
        prop_assert_eq!(bits.byte_len(), 0);
    }
}
