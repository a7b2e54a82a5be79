//! Core data structures flowing through `lewis-vsepr`.
//!
//! - [`types`] – Supported elements with their valence electron counts and
//!   electronegativities, and central–terminal bond orders.
//! - [`atom`] – Atom instance identifiers (element plus per-element index).
//! - [`molecule`] – Formula composition and net charge.
//! - [`structure`] – Candidate Lewis structures and formal charges.
//! - [`geometry`] – VSEPR table rows and the geometry predicted from them.
//! - [`prediction`] – Pipeline output: ranked structures, geometry, and the
//!   reasons a formula may have no structure at all.
//!
//! A [`Molecule`](molecule::Molecule) is the input to the [`crate::lewis`]
//! pipeline, which turns it into ranked [`Structure`](structure::Structure)s
//! and a [`Geometry`](geometry::Geometry).

pub mod atom;
pub mod geometry;
pub mod molecule;
pub mod prediction;
pub mod structure;
pub mod types;
