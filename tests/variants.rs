extern crate loopbench;
extern crate pretty_assertions;

use std::collections::BTreeSet;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use loopbench::suite::{self, Experiment};
use loopbench::variants::*;
use loopbench::{Fixture, LongSet};
use pretty_assertions::assert_eq;

fn whole(values: &[i64]) -> Vec<BigDecimal> {
    values.iter().map(|&n| BigDecimal::from(n)).collect()
}

fn sorted(set: LongSet) -> Vec<i64> {
    set.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

#[test]
fn single_list_collapses_repeated_values() {
    let data = whole(&[3, 3, 2, 1, 0]);

    assert_eq!(sorted(stream_to_set(&data)), vec![0, 1, 2, 3]);
    assert_eq!(sorted(foreach_to_set(&data)), vec![0, 1, 2, 3]);
    assert_eq!(sorted(indexed_to_set(&data)), vec![0, 1, 2, 3]);
}

#[test]
fn multi_list_merges_overlapping_lists() {
    let a = whole(&[0, 1]);
    let b = whole(&[1, 2]);

    assert_eq!(sorted(multi_stream_to_set(&a, &b)), vec![0, 1, 2]);
    assert_eq!(sorted(multi_foreach_to_set(&a, &b)), vec![0, 1, 2]);
    assert_eq!(sorted(multi_indexed_to_set(&a, &b)), vec![0, 1, 2]);
}

#[test]
fn fractional_values_share_an_entry() {
    let data: Vec<BigDecimal> = ["1.0", "1.9"].iter().map(|s| BigDecimal::from_str(s).unwrap()).collect();

    for bench in suite::in_experiment(Experiment::SingleList) {
        let fixture = Fixture::from_lists(data.clone(), vec![]);

        assert_eq!(sorted(bench.run(&fixture)), vec![1]);
    }
}

#[test]
fn empty_fixture_gives_empty_sets() {
    let fixture = Fixture::generate(0);

    for bench in suite::all() {
        assert!(bench.run(&fixture).is_empty(), "{} not empty", bench.full_name());
    }
}

#[test]
fn every_form_agrees_on_generated_fixtures() {
    for &size in &[1, 7, 100] {
        let fixture = Fixture::generate(size);
        let expected: Vec<i64> = (0..size as i64).collect();

        for bench in suite::all() {
            assert_eq!(sorted(bench.run(&fixture)), expected, "{} at {}", bench.full_name(), size);
        }
    }
}

#[test]
fn registered_multi_list_reads_both_lists() {
    let fixture = Fixture::from_lists(whole(&[0, 1]), whole(&[1, 2]));

    for bench in suite::in_experiment(Experiment::MultiList) {
        assert_eq!(sorted(bench.run(&fixture)), vec![0, 1, 2]);
    }
}
