//! A pure Rust library for predicting Lewis structures and VSEPR geometries of
//! small single-center molecules and ions from their condensed formulas.
//!
//! # Features
//!
//! - **Formula parsing** — Condensed formulas with element counts and ionic
//!   charges (`CO2`, `NH4+`, `SO4-2`, `SO4^2-`)
//! - **Octet search** — Depth-first promotion of terminal lone pairs into
//!   multiple bonds, with strict or exhaustive pruning
//! - **Formal-charge ranking** — Minimal total formal charge with an
//!   electronegativity tie-break that also reports resonance forms
//! - **VSEPR geometry** — AXE notation, shape, ideal bond angle, and
//!   hybridization of the central atom from an embedded or custom table
//!
//! # Quick Start
//!
//! The main entry point is the [`predict`] function, which takes a formula and
//! a [`LewisConfig`] and returns a [`Prediction`]:
//!
//! ```
//! use lewis_vsepr::{AtomId, BondOrder, Element};
//! use lewis_vsepr::{LewisConfig, LewisError, predict};
//!
//! let prediction = predict("CO2", &LewisConfig::default())?;
//! let result = prediction.result().expect("CO2 has a Lewis structure");
//!
//! // Carbon is central and double-bonded to both oxygens
//! assert_eq!(result.central, AtomId::central(Element::C));
//! assert_eq!(
//!     result.best.bond_order(AtomId::new(Element::O, 1)),
//!     Some(BondOrder::Double)
//! );
//!
//! // Every formal charge is zero
//! assert_eq!(result.primary_score, 0);
//! assert!(!result.has_resonance());
//!
//! // Two bonded atoms, no central lone pairs: linear sp
//! let vsepr = result.geometry.entry().unwrap();
//! assert_eq!(vsepr.notation, "AX2");
//! assert_eq!(vsepr.shape, "Linear");
//! assert_eq!(vsepr.hybridization, "sp");
//! # Ok::<(), LewisError>(())
//! ```
//!
//! Formulas without a Lewis structure are outcomes, not errors:
//!
//! ```
//! use lewis_vsepr::{LewisConfig, NoStructure, predict};
//!
//! let prediction = predict("NO2", &LewisConfig::default()).unwrap();
//! assert_eq!(
//!     prediction.no_structure(),
//!     Some(NoStructure::Radical { electrons: 17 })
//! );
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Formula parsing and plain-text report writers
//! - [`predict`] / [`predict_molecule`] — Full prediction pipeline
//! - [`LewisConfig`] — Search policy, tie-break rule, limits, and VSEPR table
//!
//! # Pipeline Stages
//!
//! Each stage is public for callers that need intermediate results:
//!
//! 1. [`select_central_atom`] — Pick the central element
//! 2. [`Skeleton::build`] — Single-bond every terminal and place lone pairs
//! 3. [`search`] — Collect candidate structures into a [`StructureStore`]
//! 4. [`rank`] — Choose the best structure and its resonance forms
//! 5. [`predict_geometry`] — Look up the VSEPR geometry in a [`VseprTable`]
//!
//! # Data Types
//!
//! - [`Element`] — Supported main-group element with valence and electronegativity
//! - [`BondOrder`] — Single, double, or triple bond
//! - [`AtomId`] — Element plus per-element index (`S0`, `O1`, ...)
//! - [`Molecule`] — Parsed composition and net charge
//! - [`Structure`] — Candidate Lewis structure with derived formal charges
//! - [`Geometry`] / [`VseprEntry`] — Predicted VSEPR geometry
//! - [`Prediction`] / [`Outcome`] / [`LewisResult`] / [`NoStructure`] — Results

mod lewis;
mod model;

pub mod io;

pub use model::atom::AtomId;
pub use model::geometry::{Geometry, VseprEntry};
pub use model::molecule::{CountOverflow, Molecule};
pub use model::prediction::{LewisResult, NoStructure, Outcome, Prediction, SearchStats};
pub use model::structure::{Structure, formal_charge};
pub use model::types::{BondOrder, Element, ParseElementError};

pub use lewis::{
    LewisConfig, Node, PENALTY_REFERENCE_EN, PENALTY_TOLERANCE, Ranking, SearchLimits,
    SearchPolicy, Skeleton, StructureStore, TieBreak, VseprTable, charge_penalty, load_table,
    negative_charge_placement, predict, predict_geometry, predict_molecule, rank, search,
    select_central_atom,
};

pub use lewis::Error as LewisError;
