//! Per-cell Hilbert curve genes
//!
//! A gene tells how the coordinate axes must be transformed when the curve
//! descends into a given sub-cell: which axes are exchanged, and which axes
//! are reflected. Hilbert key encoders and decoders look genes up by Gray code
//! index at every level of recursion.

use crate::{bits::BitVector, state::State};

/// Coordinate transform applied when descending into a sub-cell
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Gene {
    /// Axes whose coordinates are exchanged
    ///
    /// Either no bit or two bits are set in practice. This is emitted as the
    /// first element of each gene pair.
    pub exchange: BitVector,

    /// Axes whose coordinates are reflected, emitted second
    pub reverse: BitVector,
}

/// Gene table: one [`Gene`] per Gray code index
pub type GeneTable = Box<[Gene]>;

/// Derive the gene table from a Gray code and its state table
pub fn derive(gray: &[BitVector], states: &[State]) -> GeneTable {
    debug_assert_eq!(gray.len(), states.len());
    let (first, last) = match (gray.first(), gray.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return GeneTable::default(),
    };
    let span = first ^ last;
    states
        .iter()
        .map(|state| Gene {
            exchange: &span ^ &(&state.entry ^ &state.exit),
            reverse: first ^ &state.entry,
        })
        .collect()
}
