//! Error type shared by the checked entry points.

use std::fmt;

/// Errors reported by the checked variants of the functions in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Reversing the digits of `input` produced `reversed`, which does not fit into `i32`.
    Overflow { input: i32, reversed: i64 },
    /// A required input was absent.
    MissingInput { argument: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Overflow { input, reversed } => {
                write!(f, "Overflow: reversing {} gives {}, outside of i32 range", input, reversed)
            }
            Error::MissingInput { argument } => write!(f, "Invalid argument: `{}` is absent", argument),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_overflow() {
        let err = Error::Overflow {
            input: 1534236469,
            reversed: 9646324351,
        };
        let msg = err.to_string();
        assert!(msg.contains("1534236469"));
        assert!(msg.contains("9646324351"));
    }

    #[test]
    fn test_display_missing_input() {
        let err = Error::MissingInput { argument: "values" };
        assert_eq!(err.to_string(), "Invalid argument: `values` is absent");
    }
}
