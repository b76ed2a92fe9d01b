//! Ancestor and descendant closures of a designated clade.
//!
//! Both traversals are iterative. Real taxonomies reach depths in the tens of
//! thousands, which exceeds safe recursion depth on default stack sizes.

use std::collections::HashSet;

use crate::domain::entities::CladeId;
use crate::domain::error::DomainResult;
use crate::domain::tree::Taxonomy;

/// Every node on the path from `clade` up to the root, including `clade`
/// itself and excluding the root.
pub fn ancestors_of(tree: &Taxonomy, clade: &CladeId) -> DomainResult<HashSet<CladeId>> {
    let mut result = HashSet::new();
    let mut current = clade.clone();
    loop {
        let node = tree.node(&current)?;
        result.insert(current.clone());
        match &node.parent {
            Some(parent) if parent != tree.root() => current = parent.clone(),
            _ => break,
        }
    }
    Ok(result)
}

/// The subtree rooted at `clade`: the clade itself plus every node reachable
/// by following children transitively.
pub fn descendants_of(tree: &Taxonomy, clade: &CladeId) -> DomainResult<HashSet<CladeId>> {
    let mut result = HashSet::new();
    let mut stack = vec![clade.clone()];
    while let Some(current) = stack.pop() {
        let node = tree.node(&current)?;
        result.insert(current);
        for child in &node.children {
            stack.push(child.clone());
        }
    }
    Ok(result)
}
