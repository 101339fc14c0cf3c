// Weighted-choice table behavior and draw distributions.

use app_core::pick::{TableError, WeightedTable};
use fnv::FnvHashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn rejects_empty_and_bad_weights() {
    assert_eq!(WeightedTable::<u32>::new([]).unwrap_err(), TableError::Empty);
    assert_eq!(
        WeightedTable::new([(0.0, 1_u32)]).unwrap_err(),
        TableError::BadWeight(0.0)
    );
    assert_eq!(
        WeightedTable::new([(-1.0, 1_u32)]).unwrap_err(),
        TableError::BadWeight(-1.0)
    );
    assert!(matches!(
        WeightedTable::new([(f32::NAN, 1_u32)]),
        Err(TableError::BadWeight(_))
    ));
    assert!(matches!(
        WeightedTable::new([(f32::INFINITY, 1_u32)]),
        Err(TableError::BadWeight(_))
    ));
}

#[test]
fn single_entry_is_always_picked() {
    let table = WeightedTable::new([(0.25, "only")]).unwrap();
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..100 {
        assert_eq!(*table.pick(&mut rng), "only");
    }
    assert_eq!(table.len(), 1);
    assert!(!table.is_empty());
}

#[test]
fn picks_match_ornament_type_weights() {
    let table = WeightedTable::new([(0.15, "box"), (0.35, "sphere"), (0.50, "light")]).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let n = 100_000;
    let mut counts: FnvHashMap<&str, usize> = FnvHashMap::default();
    for _ in 0..n {
        *counts.entry(*table.pick(&mut rng)).or_default() += 1;
    }
    let frac = |key: &str| counts.get(key).copied().unwrap_or(0) as f64 / n as f64;
    assert!(
        (frac("box") - 0.15).abs() < 0.01,
        "box fraction {}",
        frac("box")
    );
    assert!(
        (frac("sphere") - 0.35).abs() < 0.01,
        "sphere fraction {}",
        frac("sphere")
    );
    assert!(
        (frac("light") - 0.50).abs() < 0.01,
        "light fraction {}",
        frac("light")
    );
}

#[test]
fn weights_need_not_sum_to_one() {
    let table = WeightedTable::new([(3.0, 'a'), (1.0, 'b')]).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let n = 40_000;
    let hits = (0..n).filter(|_| *table.pick(&mut rng) == 'a').count();
    let frac = hits as f64 / n as f64;
    assert!((frac - 0.75).abs() < 0.015, "fraction of 'a' was {frac}");
}
