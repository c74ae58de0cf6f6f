use njam::prelude::*;
use njam::Noun::{Atom, Cell};
use std::rc::Rc;

#[test]
fn power_of_two_atoms() {
    for k in [1u32, 7, 8, 63, 64] {
        let n = Noun::atom(BigUint::from(1u8) << k);
        let enc = jam(&n);
        assert_eq!(cue(&enc).unwrap(), n, "2^{} did not survive", k);
    }
}

#[test]
fn word_boundary_atoms_stay_canonical() {
    // 2^63 fits a word, 2^64 does not; decoding must land each in the
    // canonical variant
    let below = cue(&jam(&Noun::atom(1u64 << 63))).unwrap();
    assert!(matches!(below.as_atom(), Some(Nat::N64(_))));

    let above = cue(&jam(&Noun::atom(BigUint::from(1u8) << 64))).unwrap();
    assert!(matches!(above.as_atom(), Some(Nat::Big(_))));
}

#[test]
fn wide_atom_roundtrip() {
    let wide = Noun::atom_from_bytes(&[0xab; 100]);
    let enc = jam(&wide);
    assert_eq!(cue(&enc).unwrap(), wide);
}

#[test]
fn back_reference_beats_reemission() {
    let atom = Noun::atom(999_999u64);
    let single = jam(&atom);
    let pair = jam(&Noun::cell(atom.clone(), atom.clone()));

    // tag + 999999's body is 31 bits; the back-reference tail costs 8
    assert!(pair.len() < 2 * single.len());
    assert_eq!(cue(&pair).unwrap(), Noun::cell(atom.clone(), atom));
}

#[test]
fn shared_cells_back_reference() {
    let inner = Noun::cell(123u64, 456u64);
    let outer = Noun::cell(inner.clone(), Noun::cell(inner.clone(), inner.clone()));

    let enc = jam(&outer);
    let dec = cue(&enc).unwrap();
    assert_eq!(dec, outer);

    // the whole [inner [inner inner]] costs less than two copies of inner
    assert!(enc.len() < 2 * jam(&inner).len());
}

#[test]
fn decoded_back_references_share_structure() {
    // both halves of the decoded pair hang off the same cached cell
    let inner = Noun::cell(123_456u64, 654_321u64);
    let dec = cue(&jam(&Noun::cell(inner.clone(), inner))).unwrap();

    match dec {
        Cell(h, t) => match (h.as_ref(), t.as_ref()) {
            (Cell(hh, ht), Cell(th, tt)) => {
                assert!(Rc::ptr_eq(hh, th));
                assert!(Rc::ptr_eq(ht, tt));
            }
            _ => panic!("expected cells"),
        },
        Atom(_) => panic!("expected a cell"),
    }
}

#[test]
fn deep_right_nested_cells() {
    // jam and cue walk on explicit stacks, but building, hashing, and
    // dropping a ten-thousand-level tree still recurses, so run on a
    // widened stack
    std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| {
            let mut n = Noun::atom(0u64);
            for i in 0..10_000u64 {
                n = Noun::cell(Noun::atom(i), n);
            }
            let enc = jam(&n);
            let dec = cue(&enc).unwrap();
            assert!(dec == n);
        })
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn rep_values_roundtrip_through_the_codec() {
    let v = vec!["one".to_string(), "two".to_string(), String::new()];
    let enc = jam(&v.to_noun());
    assert_eq!(Vec::<String>::from_noun(&cue(&enc).unwrap()).unwrap(), v);

    let pair = (7u64, Some(vec![1u8, 2, 3]));
    let enc = jam(&pair.to_noun());
    assert_eq!(
        <(u64, Option<Vec<u8>>)>::from_noun(&cue(&enc).unwrap()).unwrap(),
        pair
    );
}

#[test]
fn cue_unchecked_panics_on_garbage() {
    let ok = std::panic::catch_unwind(|| cue_unchecked(&[0x02]));
    assert_eq!(ok.unwrap(), Noun::atom(0u64));

    let bad = std::panic::catch_unwind(|| cue_unchecked(&[0x00]));
    assert!(bad.is_err());
}
