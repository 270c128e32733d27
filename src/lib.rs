//! Lookup tables for N-dimensional Hilbert curves
//!
//! Converting between coordinates and positions along an N-dimensional Hilbert
//! curve is usually done one level of recursion at a time. At each level, one
//! looks up which of the 2^N sub-cells of the current cell the point lies in,
//! then reorients the coordinate axes (by exchanging and reflecting some of
//! them) before descending into that sub-cell. This crate computes the tables
//! that such a codec consults, following the method of Chenyang, Hong and
//! Nengchao (IEEE 2008):
//!
//! 1. The reflected binary Gray code, which gives the visiting order of
//!    sub-cells before reorientation (see [`gray`]).
//! 2. The corners through which the curve enters and exits each sub-cell
//!    (see [`state`]).
//! 3. The per-sub-cell axis transforms, called genes (see [`gene`]).
//!
//! The [`emit`] module then renders these tables as C array declarations.

pub mod bits;
pub mod config;
pub mod emit;
pub mod error;
pub mod gene;
pub mod gray;
pub mod state;
pub mod tables;

pub use crate::{
    bits::BitVector,
    config::Config,
    error::{Error, Result},
    tables::HilbertTables,
};

/// Integer type suitable for counting number of bits
///
/// Although 32-bit is very much overkill for this purpose, I am using this type
/// for interface compatibility with standard Rust integer methods.
///
pub type NumBits = u32;

/// Integer type into which bit vectors are packed when emitting tables
pub type Packed = u32;

/// Highest dimension for which tables can be generated
///
/// Bit vectors must fit in a [`Packed`] integer. In practice, table size grows
/// as 2^N and becomes unreasonable way before this limit is reached.
///
pub const MAX_DIMENSION: NumBits = bits::num_bits::<Packed>();
