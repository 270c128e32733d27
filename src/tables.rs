//! Complete set of lookup tables for one dimension

use crate::{
    bits::BitVector,
    config,
    error::{Error, Result},
    gene::{self, Gene, GeneTable},
    gray::{self, GrayCode},
    state::{self, State, StateTable},
    NumBits,
};
use std::time::Instant;
use tracing::debug;

/// Lookup tables of an N-dimensional Hilbert curve
///
/// All tables are computed at construction time and never modified afterwards.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HilbertTables {
    dimension: NumBits,
    gray_code: GrayCode,
    inverse_gray_code: Box<[usize]>,
    states: StateTable,
    genes: GeneTable,
}
//
impl HilbertTables {
    /// Compute the tables of a certain dimension
    pub fn generate(dimension: NumBits) -> Result<Self> {
        config::check_dimension(dimension)?;
        let start = Instant::now();
        let gray_code = gray::build(dimension);
        let inverse_gray_code = gray::inverse(&gray_code);
        let states = state::derive(&gray_code);
        let genes = gene::derive(&gray_code, &states);
        debug!(
            dimension,
            cells = gray_code.len(),
            elapsed = ?start.elapsed(),
            "generated Hilbert tables"
        );
        Ok(Self {
            dimension,
            gray_code,
            inverse_gray_code,
            states,
            genes,
        })
    }

    /// Number of dimensions of the underlying space
    pub fn dimension(&self) -> NumBits {
        self.dimension
    }

    /// Number of sub-cells per cell, i.e. 2^dimension
    pub fn num_cells(&self) -> usize {
        self.gray_code.len()
    }

    /// Gray code ordering of the sub-cells
    pub fn gray_code(&self) -> &[BitVector] {
        &self.gray_code
    }

    /// Position of each packed Gray code value within the Gray code ordering
    pub fn inverse_gray_code(&self) -> &[usize] {
        &self.inverse_gray_code
    }

    /// Entry and exit corners of each sub-cell
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Axis transforms of each sub-cell
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Check the structural properties that downstream codecs rely on
    pub fn check_invariants(&self) -> Result<()> {
        let dimension = self.dimension;
        let num_cells = self.num_cells();
        if num_cells != 1 << dimension
            || self.states.len() != num_cells
            || self.genes.len() != num_cells
        {
            return Err(Error::invariant(dimension, "tables should have 2^N entries"));
        }

        // The Gray code must be a permutation of 0..2^N, i.e. be invertible
        let mut seen = vec![false; num_cells];
        for (idx, code) in self.gray_code.iter().enumerate() {
            if code.len() != dimension {
                return Err(Error::invariant(
                    dimension,
                    format!("Gray code {idx} has {} bits", code.len()),
                ));
            }
            let value = code.pack::<usize>();
            if std::mem::replace(&mut seen[value], true) {
                return Err(Error::invariant(
                    dimension,
                    format!("Gray code value {value} appears twice"),
                ));
            }
            if self.inverse_gray_code[value] != idx {
                return Err(Error::invariant(
                    dimension,
                    format!("inverse Gray code of {value} should be {idx}"),
                ));
            }
        }

        // Consecutive Gray codes, wrapping around, differ by exactly one bit
        for (idx, code) in self.gray_code.iter().enumerate() {
            let next = &self.gray_code[(idx + 1) % num_cells];
            if (code ^ next).count_ones() != 1 {
                return Err(Error::invariant(
                    dimension,
                    format!("Gray codes {code} and {next} should differ by one bit"),
                ));
            }
        }

        // The curve cannot enter and leave a sub-cell through the same corner
        for (idx, state) in self.states.iter().enumerate() {
            if state.entry == state.exit {
                return Err(Error::invariant(
                    dimension,
                    format!("sub-cell {idx} is entered and exited at {}", state.entry),
                ));
            }
        }
        Ok(())
    }
}
