pub mod decimal;
pub mod errors;
pub mod fixture;
pub mod options;
pub mod report;
pub mod runner;
pub mod suite;
pub mod variants;

pub use crate::errors::RunError;
pub use crate::fixture::Fixture;
pub use crate::options::RunOptions;
pub use crate::report::{Measurement, Report};
pub use crate::variants::LongSet;

pub fn run(options: &RunOptions) -> Result<Report, RunError> {
    runner::run(options)
}
