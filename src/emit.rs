//! Rendering of Hilbert tables as C array declarations
//!
//! For every dimension d, three arrays are declared:
//!
//! - `C<d>`, the Gray code, with each bit vector packed into an integer.
//! - `revC<d>`, the inverse of the Gray code permutation.
//! - `H<d>`, the genes, as (exchange, reverse) pairs of packed integers.
//!
//! Once all dimensions have been emitted, the `C`, `revC` and `H` arrays of
//! pointers give access to the tables of dimension d at index d-1.

use crate::{
    config::Config,
    error::{Error, Result},
    tables::HilbertTables,
    NumBits, Packed,
};
use std::{fmt::Display, io::Write};
use tracing::{debug, info};

/// C type of table elements, must be able to hold a [`Packed`] integer
const ELEMENT_TYPE: &str = "uint32_t";

/// Writer of C table declarations
pub struct Emitter<W: Write> {
    out: W,
    header_guard: Option<String>,
    num_dimensions: NumBits,
}
//
impl<W: Write> Emitter<W> {
    /// Emit bare declarations, to be embedded in some other C source
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_guard: None,
            num_dimensions: 0,
        }
    }

    /// Emit a self-contained C header
    ///
    /// The declarations get wrapped into an include guard, and the highest
    /// dimension that will be emitted is exposed as `HILB_MAX_DIM`.
    ///
    pub fn header(mut out: W, guard: &str, max_dimension: NumBits) -> Result<Self> {
        writeln!(out, "#ifndef {guard}")?;
        writeln!(out, "#define {guard}")?;
        writeln!(out)?;
        writeln!(out, "#include <stdint.h>")?;
        writeln!(out)?;
        writeln!(out, "#define HILB_MAX_DIM {max_dimension}")?;
        writeln!(out)?;
        Ok(Self {
            out,
            header_guard: Some(guard.to_owned()),
            num_dimensions: 0,
        })
    }

    /// Emit the tables of the next dimension
    ///
    /// Dimensions must be emitted in order, starting from 1, as the pointer
    /// arrays written by `finish()` are indexed by dimension.
    ///
    pub fn emit(&mut self, tables: &HilbertTables) -> Result<()> {
        let dimension = tables.dimension();
        if dimension != self.num_dimensions + 1 {
            return Err(Error::invariant(
                dimension,
                format!(
                    "tables must be emitted in dimension order, expected dimension {}",
                    self.num_dimensions + 1
                ),
            ));
        }

        write!(self.out, "{ELEMENT_TYPE} C{dimension}[] = ")?;
        write_list(
            &mut self.out,
            tables.gray_code().iter().map(|code| code.pack::<Packed>()),
        )?;
        writeln!(self.out, ";")?;

        write!(self.out, "{ELEMENT_TYPE} revC{dimension}[] = ")?;
        write_list(&mut self.out, tables.inverse_gray_code().iter())?;
        writeln!(self.out, ";")?;

        write!(self.out, "{ELEMENT_TYPE} H{dimension}[][2] = ")?;
        write_list(
            &mut self.out,
            tables.genes().iter().map(|gene| {
                format!(
                    "{{{},{}}}",
                    gene.exchange.pack::<Packed>(),
                    gene.reverse.pack::<Packed>()
                )
            }),
        )?;
        writeln!(self.out, ";")?;

        debug!(dimension, cells = tables.num_cells(), "emitted Hilbert tables");
        self.num_dimensions = dimension;
        Ok(())
    }

    /// Emit the per-dimension pointer arrays and close the header, if any
    pub fn finish(mut self) -> Result<W> {
        for name in ["C", "revC", "H"] {
            write!(self.out, "{ELEMENT_TYPE} * {name}[] = ")?;
            write_list(
                &mut self.out,
                (1..=self.num_dimensions)
                    .map(|dimension| format!("({ELEMENT_TYPE}*)&{name}{dimension}")),
            )?;
            writeln!(self.out, ";")?;
        }
        if let Some(guard) = &self.header_guard {
            writeln!(self.out)?;
            writeln!(self.out, "#endif /* {guard} */")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

// Write a brace-delimited, comma-separated C initializer list
fn write_list<T: Display>(
    out: &mut impl Write,
    items: impl IntoIterator<Item = T>,
) -> Result<()> {
    write!(out, "{{")?;
    for (idx, item) in items.into_iter().enumerate() {
        if idx != 0 {
            write!(out, ",")?;
        }
        write!(out, "{item}")?;
    }
    write!(out, "}}")?;
    Ok(())
}

/// Generate and emit the tables of every dimension from 1 to the configured
/// maximum, returning the output once everything has been written
pub fn generate<W: Write>(config: &Config, out: W) -> Result<W> {
    let mut emitter = match config.header_guard() {
        Some(guard) => Emitter::header(out, guard, config.max_dimension())?,
        None => Emitter::new(out),
    };
    for dimension in 1..=config.max_dimension() {
        let tables = HilbertTables::generate(dimension)?;
        if config.check_invariants() {
            tables.check_invariants()?;
        }
        emitter.emit(&tables)?;
    }
    let out = emitter.finish()?;
    info!(
        max_dimension = config.max_dimension(),
        "generated Hilbert tables"
    );
    Ok(out)
}
