//! Generator configuration

use crate::{
    error::{Error, Result},
    NumBits, MAX_DIMENSION,
};
use tracing::warn;

/// Dimension above which generated sources get uncomfortably large
pub const LARGE_DIMENSION: NumBits = 20;

/// What to generate, and how to wrap it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    max_dimension: NumBits,
    header_guard: Option<String>,
    check_invariants: bool,
}
//
impl Config {
    /// Generate tables for every dimension from 1 to `max_dimension`
    pub fn new(max_dimension: NumBits) -> Result<Self> {
        check_dimension(max_dimension)?;
        if max_dimension > LARGE_DIMENSION {
            warn!(
                max_dimension,
                "tables grow as 2^N, output above {LARGE_DIMENSION} dimensions will be huge"
            );
        }
        Ok(Self {
            max_dimension,
            header_guard: None,
            check_invariants: false,
        })
    }

    /// Wrap the output into a C header with the given include guard
    pub fn with_header_guard(mut self, guard: impl Into<String>) -> Result<Self> {
        let guard = guard.into();
        if !is_c_identifier(&guard) {
            return Err(Error::InvalidHeaderGuard(guard));
        }
        self.header_guard = Some(guard);
        Ok(self)
    }

    /// Check every table set for consistency before emitting it
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }

    /// Highest dimension to generate tables for
    pub fn max_dimension(&self) -> NumBits {
        self.max_dimension
    }

    /// Include guard of the generated header, if any
    pub fn header_guard(&self) -> Option<&str> {
        self.header_guard.as_deref()
    }

    /// Truth that table sets are checked before emission
    pub fn check_invariants(&self) -> bool {
        self.check_invariants
    }
}

/// Ensure that tables can be generated for a certain dimension
pub fn check_dimension(dimension: NumBits) -> Result<()> {
    if (1..=MAX_DIMENSION).contains(&dimension) {
        Ok(())
    } else {
        Err(Error::InvalidDimension {
            dimension,
            max: MAX_DIMENSION,
        })
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
