use std::fmt;

use glob::Pattern;

use crate::errors::RunError;
use crate::fixture::Fixture;
use crate::variants::{self, LongSet};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Experiment {
    SingleList,
    MultiList
}

impl Experiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Experiment::SingleList => "single_list",
            Experiment::MultiList => "multi_list"
        }
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Operation = fn(&Fixture) -> LongSet;

#[derive(Clone, Copy)]
pub struct Benchmark {
    pub experiment: Experiment,
    pub name: &'static str,
    pub op: Operation
}

impl Benchmark {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.experiment, self.name)
    }

    pub fn run(&self, fixture: &Fixture) -> LongSet {
        (self.op)(fixture)
    }
}

impl fmt::Debug for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Benchmark({})", self.full_name())
    }
}

macro_rules! declare_benchmarks {(
    $( ($experiment: ident, $name: expr, $op: expr) )*
) => {
    pub static BENCHMARKS: &[Benchmark] = &[
        $(
            Benchmark { experiment: Experiment::$experiment, name: $name, op: $op },
        )*
    ];
}}

declare_benchmarks! {
    (SingleList, "stream_to_set",  |f| variants::stream_to_set(&f.primary))
    (SingleList, "foreach_to_set", |f| variants::foreach_to_set(&f.primary))
    (SingleList, "indexed_to_set", |f| variants::indexed_to_set(&f.primary))
    (MultiList,  "stream_to_set",  |f| variants::multi_stream_to_set(&f.primary, &f.secondary))
    (MultiList,  "foreach_to_set", |f| variants::multi_foreach_to_set(&f.primary, &f.secondary))
    (MultiList,  "indexed_to_set", |f| variants::multi_indexed_to_set(&f.primary, &f.secondary))
}

pub fn all() -> &'static [Benchmark] {
    BENCHMARKS
}

pub fn find(full_name: &str) -> Option<&'static Benchmark> {
    BENCHMARKS.iter().find(|b| b.full_name() == full_name)
}

pub fn in_experiment(experiment: Experiment) -> Vec<&'static Benchmark> {
    BENCHMARKS.iter().filter(|b| b.experiment == experiment).collect()
}

/// Benchmarks whose full name matches the wildcard `include`.
pub fn matching(include: &str) -> Result<Vec<&'static Benchmark>, RunError> {
    let pattern = Pattern::new(include)?;
    Ok(BENCHMARKS.iter().filter(|b| pattern.matches(&b.full_name())).collect())
}
