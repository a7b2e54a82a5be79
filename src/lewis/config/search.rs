//! Octet search policies and resource limits.

/// Pruning policy applied while expanding lone pairs into multiple bonds.
///
/// The two policies explore different parts of the search tree and may
/// therefore produce different resonance sets for the same formula. They are
/// never combined: a search runs entirely under one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPolicy {
    /// Minimal search with every pruning rule enabled.
    ///
    /// - A node with a positively charged terminal halogen is discarded and
    ///   not expanded.
    /// - A node whose center holds exactly eight electrons with a
    ///   non-positive formal charge, and whose terminals are all neutral, is
    ///   recorded but not expanded.
    /// - A B/C/N/O/F center stops expanding once it holds eight electrons.
    #[default]
    Strict,

    /// Unpruned search bounded only by the second-row octet cap.
    ///
    /// Every node is recorded, including those with charged terminal
    /// halogens, and stable octets are still expanded. Expanded-octet
    /// structures of third-row centers all appear as candidates.
    Exhaustive,
}

impl SearchPolicy {
    #[inline]
    pub fn prunes_charged_halogens(&self) -> bool {
        matches!(self, SearchPolicy::Strict)
    }

    #[inline]
    pub fn stops_at_stable_octet(&self) -> bool {
        matches!(self, SearchPolicy::Strict)
    }
}

/// Hard ceilings on the size of one search.
///
/// # Examples
///
/// ```
/// use lewis_vsepr::SearchLimits;
///
/// let tight = SearchLimits { max_nodes: 1_000 };
/// assert!(tight.max_nodes < SearchLimits::default().max_nodes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of search nodes evaluated before expansion stops.
    ///
    /// Candidates recorded up to that point are still ranked; the search
    /// statistics report the run as truncated. Default is `250_000`.
    pub max_nodes: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self { max_nodes: 250_000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_enables_both_prunes() {
        assert!(SearchPolicy::Strict.prunes_charged_halogens());
        assert!(SearchPolicy::Strict.stops_at_stable_octet());
    }

    #[test]
    fn exhaustive_disables_both_prunes() {
        assert!(!SearchPolicy::Exhaustive.prunes_charged_halogens());
        assert!(!SearchPolicy::Exhaustive.stops_at_stable_octet());
    }
}
