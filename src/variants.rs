//! The transformations under measurement. Every function maps each decimal
//! to its truncated integer and collects the distinct values; they differ
//! only in how they walk the input.

use bigdecimal::BigDecimal;
use fnv::FnvHashSet;

use crate::decimal::long_value;

pub type LongSet = FnvHashSet<i64>;

pub fn stream_to_set(data: &[BigDecimal]) -> LongSet {
    data.iter().map(long_value).collect()
}

pub fn foreach_to_set(data: &[BigDecimal]) -> LongSet {
    let mut set = LongSet::default();
    for d in data {
        set.insert(long_value(d));
    }
    set
}

pub fn indexed_to_set(data: &[BigDecimal]) -> LongSet {
    let mut set = LongSet::default();
    let mut i = 0;
    while i < data.len() {
        set.insert(long_value(&data[i]));
        i += 1;
    }
    set
}

pub fn multi_stream_to_set(data: &[BigDecimal], data02: &[BigDecimal]) -> LongSet {
    [data, data02].iter()
        .flat_map(|list| list.iter())
        .map(long_value)
        .collect()
}

pub fn multi_foreach_to_set(data: &[BigDecimal], data02: &[BigDecimal]) -> LongSet {
    let mut set = LongSet::default();
    for d in data {
        set.insert(long_value(d));
    }
    for d in data02 {
        set.insert(long_value(d));
    }
    set
}

pub fn multi_indexed_to_set(data: &[BigDecimal], data02: &[BigDecimal]) -> LongSet {
    let mut set = LongSet::default();
    let mut i = 0;
    while i < data.len() {
        set.insert(long_value(&data[i]));
        i += 1;
    }
    let mut i = 0;
    while i < data02.len() {
        set.insert(long_value(&data02[i]));
        i += 1;
    }
    set
}
