//! Reachability search used to tell cyclic edges from acyclic ones.

use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::types::{DigraphError, DigraphResult};

use super::Digraph;

/// How the depth-first search tracks visited vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleSearch {
    /// One visited set for the whole search. Linear in vertices plus edges.
    #[default]
    Shared,
    /// Every recursive call owns a copy of the visited set, so sibling
    /// branches re-explore vertices the other already saw. Exponential on
    /// dense graphs; gives the same answers as `Shared`.
    BranchLocal,
}

/// True if a directed path leads from `from` to `to`. A vertex reaches itself.
///
/// Fails on an empty graph and when either endpoint is not a vertex.
pub fn reaches<T: Ord + Clone + Debug>(
    graph: &Digraph<T>,
    from: &T,
    to: &T,
    mode: CycleSearch,
) -> DigraphResult<bool> {
    if graph.is_empty() {
        return Err(DigraphError::empty("cycle detection"));
    }
    for endpoint in [from, to] {
        if !graph.contains_vertex(endpoint) {
            return Err(DigraphError::not_found(endpoint));
        }
    }

    let found = match mode {
        CycleSearch::Shared => reaches_shared(graph, from, to),
        CycleSearch::BranchLocal => reaches_branch_local(graph, from, to, BTreeSet::new()),
    };
    log::trace!("reaches {:?} -> {:?} ({:?}): {}", from, to, mode, found);
    Ok(found)
}

fn reaches_shared<T: Ord + Clone>(graph: &Digraph<T>, from: &T, to: &T) -> bool {
    let mut visited: BTreeSet<&T> = BTreeSet::new();
    let mut stack: Vec<&T> = vec![from];

    while let Some(current) = stack.pop() {
        if current == to {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        if let Some(successors) = graph.successor_set(current) {
            stack.extend(successors.iter().filter(|s| !visited.contains(s)));
        }
    }

    false
}

fn reaches_branch_local<'g, T: Ord + Clone>(
    graph: &'g Digraph<T>,
    current: &'g T,
    to: &T,
    mut visited: BTreeSet<&'g T>,
) -> bool {
    if current == to {
        return true;
    }
    if !visited.insert(current) {
        return false;
    }
    graph.successor_set(current).is_some_and(|successors| {
        successors
            .iter()
            .any(|next| reaches_branch_local(graph, next, to, visited.clone()))
    })
}
