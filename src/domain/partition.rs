//! Depth-bounded partitioning of the taxonomy into core and remainder.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::closure::{ancestors_of, descendants_of};
use crate::domain::entities::{CladeId, Record};
use crate::domain::error::DomainResult;
use crate::domain::tree::Taxonomy;

/// Result of splitting the tree: the core neighborhood plus the long tail.
#[derive(Debug)]
pub struct Partition {
    /// Core records in pre-order traversal order
    pub core_records: Vec<Record>,
    /// Ids of all core records
    pub core: HashSet<CladeId>,
    /// Everything not reached by the core traversal
    pub remainder: HashSet<CladeId>,
}

/// Split the tree into a depth-bounded core and a remainder.
///
/// Pre-order traversal from `root_id` at depth 0. Each visited node is emitted
/// into the core; children are descended into while `depth < max_depth`, or
/// unconditionally while the current node lies inside the override set. The
/// remainder is whatever the traversal never reached.
///
/// The override set is the clade's subtree plus its ancestor chain. Keeping
/// the ancestors in the set is what lets the traversal tunnel down to a clade
/// that sits deeper than `max_depth`: each ancestor on the path is expanded
/// past the cutoff, while off-path siblings still stop at `max_depth`.
pub fn partition(
    tree: &Taxonomy,
    root_id: &CladeId,
    override_clade: &CladeId,
    max_depth: u32,
) -> DomainResult<Partition> {
    let mut override_set = descendants_of(tree, override_clade)?;
    override_set.extend(ancestors_of(tree, override_clade)?);
    tree.node(root_id)?;

    let mut candidates: HashSet<CladeId> = tree.ids().cloned().collect();
    let mut core = HashSet::new();
    let mut core_records = Vec::new();

    let mut stack = vec![(root_id.clone(), 0u32)];
    while let Some((current, depth)) = stack.pop() {
        candidates.remove(&current);
        let node = tree.node(&current)?;
        core_records.push(Record {
            id: current.clone(),
            parent: node.parent.clone(),
            name: node.name.clone(),
        });
        if depth < max_depth || override_set.contains(&current) {
            // Push children in reverse order for left-to-right traversal
            for child in node.children.iter().rev() {
                stack.push((child.clone(), depth + 1));
            }
        }
        core.insert(current);
    }

    debug!(
        "partitioned: core={} remainder={}",
        core.len(),
        candidates.len()
    );
    Ok(Partition {
        core_records,
        core,
        remainder: candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Override clade c sits below the depth cutoff, sibling branch e exceeds it.
    //
    //        root
    //        /  \
    //       a    b
    //       |    |
    //       c    e     (depth 2)
    //       |
    //       d          (depth 3)
    fn sample_tree() -> Taxonomy {
        Taxonomy::build(vec![
            Record::new("root", None, "Life"),
            Record::new("a", Some("root".into()), "Animals"),
            Record::new("b", Some("root".into()), "Fungi"),
            Record::new("c", Some("a".into()), "Primates"),
            Record::new("d", Some("c".into()), "Human"),
            Record::new("e", Some("b".into()), "Other"),
        ])
        .unwrap()
    }

    #[test]
    fn given_override_clade_when_partitioning_then_its_subtree_escapes_depth_cutoff() {
        let tree = sample_tree();

        let result = partition(&tree, &"root".into(), &"c".into(), 1).unwrap();

        let expected_core: HashSet<CladeId> =
            ["root", "a", "b", "c", "d"].iter().map(|&s| s.into()).collect();
        let expected_remainder: HashSet<CladeId> = [CladeId::from("e")].into_iter().collect();
        assert_eq!(result.core, expected_core);
        assert_eq!(result.remainder, expected_remainder);
    }

    #[test]
    fn given_max_depth_zero_when_partitioning_then_core_is_root_only() {
        // The ancestor chain excludes the root itself, so nothing tunnels
        // through a zero cutoff: the root is emitted but never expanded.
        let tree = sample_tree();

        let result = partition(&tree, &"root".into(), &"c".into(), 0).unwrap();

        let expected: HashSet<CladeId> = [CladeId::from("root")].into_iter().collect();
        assert_eq!(result.core, expected);
        assert_eq!(result.remainder.len(), tree.len() - 1);
    }

    #[test]
    fn given_any_cutoff_when_partitioning_then_core_and_remainder_cover_all_ids() {
        let tree = sample_tree();

        for max_depth in 0..4 {
            let result = partition(&tree, &"root".into(), &"c".into(), max_depth).unwrap();

            assert_eq!(result.core.len() + result.remainder.len(), tree.len());
            assert!(result.core.is_disjoint(&result.remainder));
            assert!(result.core.contains(&"root".into()));
            assert_eq!(result.core_records.len(), result.core.len());
        }
    }

    #[test]
    fn given_traversal_when_emitting_core_then_order_is_preorder() {
        let tree = sample_tree();

        let result = partition(&tree, &"root".into(), &"c".into(), 1).unwrap();

        let order: Vec<&str> = result.core_records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["root", "a", "c", "d", "b"]);
    }

    #[test]
    fn given_nodes_outside_override_when_partitioning_then_depth_bound_holds() {
        let tree = sample_tree();
        let max_depth = 1;

        let result = partition(&tree, &"root".into(), &"c".into(), max_depth).unwrap();
        let subtree = descendants_of(&tree, &"c".into()).unwrap();

        let depths = [("root", 0u32), ("a", 1), ("b", 1), ("c", 2), ("d", 3), ("e", 2)];
        for (id, depth) in depths {
            let id = CladeId::from(id);
            if result.core.contains(&id) && !subtree.contains(&id) {
                assert!(depth <= max_depth, "{id} at depth {depth} breaks the cutoff");
            }
        }
    }
}
