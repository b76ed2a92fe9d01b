//! Taxonomy graph: builds the fully linked tree from unordered flat records.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::entities::{CladeId, Node, Record};
use crate::domain::error::{DomainError, DomainResult};

/// Fully linked, immutable-after-construction taxonomy tree.
///
/// Owns the complete node table for the lifetime of the program. Closure and
/// partition queries borrow it read-only; nothing mutates it after `build`.
#[derive(Debug)]
pub struct Taxonomy {
    nodes: HashMap<CladeId, Node>,
    root: CladeId,
}

impl Taxonomy {
    /// Build the tree from flat records in any order.
    ///
    /// First pass inserts every record into the node table; second pass links
    /// each non-root node into its parent's children list, in record order.
    /// Children lists are derived here and nowhere else, so a child appearing
    /// before its parent in the input is fine.
    ///
    /// # Errors
    /// - `DuplicateId` if an id occurs twice
    /// - `Structure` if zero or more than one record is root-marked
    /// - `MissingParent` if a parent id does not resolve
    pub fn build(records: impl IntoIterator<Item = Record>) -> DomainResult<Self> {
        let mut nodes: HashMap<CladeId, Node> = HashMap::new();
        let mut links: Vec<(CladeId, CladeId)> = Vec::new();
        let mut root: Option<CladeId> = None;

        for record in records {
            let Record { id, parent, name } = record;
            match &parent {
                None => {
                    if let Some(existing) = &root {
                        return Err(DomainError::Structure(format!(
                            "multiple root records: {existing} and {id}"
                        )));
                    }
                    root = Some(id.clone());
                }
                Some(parent_id) => links.push((id.clone(), parent_id.clone())),
            }
            let node = Node {
                parent,
                name,
                children: Vec::new(),
            };
            if nodes.insert(id.clone(), node).is_some() {
                return Err(DomainError::DuplicateId(id));
            }
        }

        let root = root.ok_or_else(|| DomainError::Structure("no root record found".into()))?;

        for (id, parent_id) in links {
            let parent = nodes
                .get_mut(&parent_id)
                .ok_or(DomainError::MissingParent {
                    id: id.clone(),
                    parent: parent_id,
                })?;
            parent.children.push(id);
        }

        debug!("built taxonomy: {} nodes, root={}", nodes.len(), root);
        Ok(Self { nodes, root })
    }

    pub fn root(&self) -> &CladeId {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &CladeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &CladeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Node lookup that surfaces `UnknownNode` for absent ids.
    pub fn node(&self, id: &CladeId) -> DomainResult<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| DomainError::UnknownNode(id.clone()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &CladeId> {
        self.nodes.keys()
    }

    /// Reconstruct the flat record for a node, e.g. for emitting to a sink.
    pub fn record_of(&self, id: &CladeId) -> DomainResult<Record> {
        let node = self.node(id)?;
        Ok(Record {
            id: id.clone(),
            parent: node.parent.clone(),
            name: node.name.clone(),
        })
    }
}
