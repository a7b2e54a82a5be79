//! Configuration types for Lewis structure prediction.
//!
//! This module defines the settings that control the
//! [`predict`](super::predict) pipeline: which search policy bounds the
//! octet search, how ties between equally charged structures are broken,
//! how large a search may grow, and which VSEPR table is used.
//!
//! # Overview
//!
//! - [`LewisConfig`] — Main configuration struct
//! - [`SearchPolicy`] — Strict (pruned) or exhaustive octet search
//! - [`TieBreak`] — Discrete placement rule or continuous penalty
//! - [`SearchLimits`] — Node ceiling guarding against runaway searches

mod scoring;
mod search;

pub use scoring::{PENALTY_REFERENCE_EN, PENALTY_TOLERANCE, TieBreak};
pub use search::{SearchLimits, SearchPolicy};

/// Main configuration for Lewis structure prediction.
///
/// # Examples
///
/// ```
/// use lewis_vsepr::{LewisConfig, SearchPolicy, TieBreak};
///
/// // Pruned search with the discrete placement tie-break
/// let strict = LewisConfig::default();
/// assert_eq!(strict.search, SearchPolicy::Strict);
///
/// // Unpruned search scored with the continuous penalty
/// let exhaustive = LewisConfig::exhaustive();
/// assert_eq!(exhaustive.tie_break, TieBreak::ElectronegativityPenalty);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LewisConfig {
    /// Replacement VSEPR table in TOML format.
    ///
    /// If `None`, uses the embedded `vsepr.toml` with the fourteen standard
    /// AXE geometries.
    pub vsepr: Option<String>,

    /// Pruning policy for the octet search.
    pub search: SearchPolicy,

    /// Rule separating structures with equal formal-charge scores.
    pub tie_break: TieBreak,

    /// Size ceilings for one search.
    pub limits: SearchLimits,
}

impl LewisConfig {
    /// Unpruned search paired with the continuous penalty tie-break.
    pub fn exhaustive() -> Self {
        Self {
            search: SearchPolicy::Exhaustive,
            tie_break: TieBreak::ElectronegativityPenalty,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = LewisConfig::default();
        assert!(config.vsepr.is_none());
        assert_eq!(config.search, SearchPolicy::Strict);
        assert_eq!(config.tie_break, TieBreak::ChargePlacement);
        assert_eq!(config.limits, SearchLimits::default());
    }

    #[test]
    fn exhaustive_config_pairs_policy_and_penalty() {
        let config = LewisConfig::exhaustive();
        assert_eq!(config.search, SearchPolicy::Exhaustive);
        assert_eq!(config.tie_break, TieBreak::ElectronegativityPenalty);
        assert!(config.vsepr.is_none());
    }
}
