use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum RunError {
    Io(io::Error),
    Config(serde_json::Error),
    InvalidPattern(glob::PatternError),
    InvalidOption(&'static str),
    InvalidArgument(String),
    NoMatchingBenchmarks(String)
}

impl fmt::Display for RunError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Error: ")?;

        match *self {
            RunError::Io(ref err) => {
                write!(fmt, "Cannot read options: {}", err)
            },
            RunError::Config(ref err) => {
                write!(fmt, "Malformed options: {}", err)
            },
            RunError::InvalidPattern(ref err) => {
                write!(fmt, "Invalid include pattern: {}", err)
            },
            RunError::InvalidOption(reason) => {
                write!(fmt, "Invalid option: {}", reason)
            },
            RunError::InvalidArgument(ref arg) => {
                write!(fmt, "Invalid argument: {}", arg)
            },
            RunError::NoMatchingBenchmarks(ref pattern) => {
                write!(fmt, "No benchmarks match '{}'", pattern)
            }
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            RunError::Io(ref err) => Some(err),
            RunError::Config(ref err) => Some(err),
            RunError::InvalidPattern(ref err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> RunError {
        RunError::Io(err)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(err: serde_json::Error) -> RunError {
        RunError::Config(err)
    }
}

impl From<glob::PatternError> for RunError {
    fn from(err: glob::PatternError) -> RunError {
        RunError::InvalidPattern(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_option_errors() {
        let err = RunError::InvalidOption("measurement_iterations must be at least 1");

        assert_eq!(err.to_string(), "Error: Invalid option: measurement_iterations must be at least 1");
    }

    #[test]
    fn exposes_underlying_pattern_error() {
        let err: RunError = glob::Pattern::new("[").unwrap_err().into();

        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Error: Invalid include pattern"));
    }
}
