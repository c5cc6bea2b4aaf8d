use bigdecimal::BigDecimal;

pub const DEFAULT_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Input lists for one run group. Single-list variants read `primary`,
/// multi-list variants read `primary` followed by `secondary`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub primary: Vec<BigDecimal>,
    pub secondary: Vec<BigDecimal>
}

impl Fixture {
    /// Two identical lists holding `size - 1` down to `0`.
    pub fn generate(size: usize) -> Fixture {
        Fixture {
            primary: descending(size),
            secondary: descending(size)
        }
    }

    pub fn from_lists(primary: Vec<BigDecimal>, secondary: Vec<BigDecimal>) -> Fixture {
        Fixture { primary, secondary }
    }

    pub fn size(&self) -> usize {
        self.primary.len()
    }
}

fn descending(size: usize) -> Vec<BigDecimal> {
    (0..size as i64).rev().map(BigDecimal::from).collect()
}
