//! Error types for core value parsing and config validation.

use std::fmt;

/// A color string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// The string does not start with `#`.
    MissingHash {
        /// The rejected input.
        input: String,
    },
    /// The string is not 3 or 6 hexadecimal digits after the `#`.
    Malformed {
        /// The rejected input.
        input: String,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash { input } => {
                write!(f, "color {input:?} must start with '#'")
            }
            Self::Malformed { input } => {
                write!(f, "color {input:?} is not #RGB or #RRGGBB hex")
            }
        }
    }
}

impl std::error::Error for ColorError {}

/// A grid type tag was not recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridTypeError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for GridTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown grid type {:?} (expected square, hex-flat-odd, hex-flat-even, \
             hex-pointy-odd or hex-pointy-even)",
            self.input
        )
    }
}

impl std::error::Error for GridTypeError {}

/// A [`GridConfig`](crate::GridConfig) field is outside its legal range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric field is out of range.
    OutOfRange {
        /// Wire name of the field (`cols`, `tileSize`, ...).
        field: &'static str,
        /// The offending value.
        value: u32,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} = {value} is outside [{min}, {max}]"),
        }
    }
}

impl std::error::Error for ConfigError {}
