use super::config::{SearchLimits, SearchPolicy};
use super::skeleton::{Node, Skeleton};
use super::store::StructureStore;
use crate::model::prediction::SearchStats;
use crate::model::structure::Structure;
use std::collections::HashSet;

/// Explores lone-pair promotions from the skeleton and collects every
/// candidate structure the policy admits.
///
/// Traversal is depth-first with children visited in terminal order, so the
/// store lists candidates in a fixed order for a given skeleton. A node
/// reached a second time through another promotion sequence is neither
/// recorded again nor re-expanded.
pub fn search(
    skeleton: &Skeleton,
    policy: SearchPolicy,
    limits: SearchLimits,
) -> (StructureStore, SearchStats) {
    let mut store = StructureStore::new();
    let mut stats = SearchStats::default();
    let mut visited: HashSet<Node> = HashSet::new();
    let mut stack = vec![skeleton.initial().clone()];
    let octet_limited = skeleton.central().element.is_octet_limited();

    while let Some(node) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }
        if stats.nodes_visited >= limits.max_nodes {
            stats.truncated = true;
            log::warn!(
                "octet search stopped after {} nodes; results may be incomplete",
                limits.max_nodes
            );
            break;
        }
        stats.nodes_visited += 1;

        let structure = skeleton.materialize(&node);
        log::trace!(
            "node {}: orders {:?}, lone electrons {:?}",
            stats.nodes_visited,
            node.orders,
            node.lone_electrons
        );

        if policy.prunes_charged_halogens() && has_charged_halogen(&structure) {
            log::trace!("pruned: positively charged terminal halogen");
            visited.insert(node);
            continue;
        }

        let stable = is_stable_octet(&structure);
        let capped = octet_limited && structure.central_electron_count() >= 8;
        store.insert(structure);

        if (policy.stops_at_stable_octet() && stable) || capped {
            visited.insert(node);
            continue;
        }

        for terminal in (0..node.orders.len()).rev() {
            if let Some(child) = node.promote(terminal) {
                if !visited.contains(&child) {
                    stack.push(child);
                }
            }
        }
        visited.insert(node);
    }

    stats.candidates = store.len();
    log::debug!(
        "octet search: {} nodes visited, {} candidates{}",
        stats.nodes_visited,
        stats.candidates,
        if stats.truncated { " (truncated)" } else { "" }
    );

    (store, stats)
}

/// `true` if any terminal halogen carries a positive formal charge.
fn has_charged_halogen(structure: &Structure) -> bool {
    structure
        .formal_charges()
        .iter()
        .any(|(atom, charge)| !atom.is_central() && atom.element.is_halogen() && *charge > 0)
}

/// `true` if the center holds exactly eight electrons with a non-positive
/// charge and every terminal is neutral.
fn is_stable_octet(structure: &Structure) -> bool {
    let central = structure.central();
    structure.central_electron_count() == 8
        && structure.formal_charge(central).is_some_and(|c| c <= 0)
        && structure
            .formal_charges()
            .iter()
            .filter(|(atom, _)| !atom.is_central())
            .all(|(_, charge)| *charge == 0)
}
