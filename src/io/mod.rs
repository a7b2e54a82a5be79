//! Text input and output for `lewis-vsepr`.
//!
//! - [`parse_formula`] turns a condensed formula such as `SO4-2` into a
//!   [`Molecule`](crate::Molecule).
//! - [`write_prediction`], [`write_structure`], [`write_geometry`] and
//!   [`write_vsepr_table`] render results as plain text to any
//!   [`std::io::Write`] sink.

pub mod error;

mod formula;
mod text;

pub use error::Error;
pub use formula::parse_formula;
pub use text::{
    describe_no_structure, write_geometry, write_prediction, write_structure, write_vsepr_table,
};
