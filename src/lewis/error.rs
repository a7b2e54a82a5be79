//! Error types for Lewis structure prediction.
//!
//! Only malformed input can fail the pipeline: an unparseable formula or an
//! invalid VSEPR table. Formulas that simply have no Lewis structure
//! (radicals, electron-deficient skeletons) are reported as an
//! [`Outcome`](crate::Outcome), not as an error.

use thiserror::Error;

/// Errors that can occur while predicting a Lewis structure.
#[derive(Debug, Error)]
pub enum Error {
    /// The formula string could not be parsed.
    #[error("invalid formula: {0}")]
    Formula(#[from] crate::io::Error),

    /// The VSEPR table TOML could not be deserialized.
    #[error("failed to parse VSEPR table: {0}")]
    VseprTableParse(#[from] toml::de::Error),

    /// The VSEPR table parsed but is structurally invalid.
    ///
    /// Occurs when two rows share the same (X, E) key.
    #[error("invalid VSEPR table: {0}")]
    VseprTable(String),
}

impl Error {
    /// Creates a [`VseprTable`](Error::VseprTable) error for a repeated key.
    pub fn duplicate_vsepr_entry(bonded: u8, lone_pairs: u8) -> Self {
        Self::VseprTable(format!(
            "duplicate entry for X={}, E={}",
            bonded, lone_pairs
        ))
    }
}
