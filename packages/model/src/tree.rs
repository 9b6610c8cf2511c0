//! Instance tree index.
//!
//! Instances carry parent pointers rather than owned child lists, so the
//! index is built once per page (children discovered by `parent_id`), the
//! tree invariants are checked up front, and all traversal afterwards walks
//! the index instead of rescanning the flat list.

use crate::project::ComponentInstance;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// `parent_id` does not reference an instance on the same page.
    #[error("instance '{child}' references missing parent '{parent}'")]
    MissingParent { child: String, parent: String },

    #[error("duplicate instance id '{0}'")]
    DuplicateId(String),

    /// The parent/child relation does not form a tree.
    #[error("instance '{0}' is part of a parent cycle")]
    Cycle(String),
}

/// Children-by-parent index over one page's instances.
#[derive(Debug)]
pub struct InstanceTree<'a> {
    roots: Vec<&'a ComponentInstance>,
    children: HashMap<&'a str, Vec<&'a ComponentInstance>>,
}

impl<'a> InstanceTree<'a> {
    /// Build the index and validate the tree invariants.
    ///
    /// Siblings are ordered by `order`, with ties broken by instance id so
    /// traversal is fully deterministic.
    pub fn build(instances: &'a [ComponentInstance]) -> Result<Self, TreeError> {
        let mut ids = HashSet::with_capacity(instances.len());
        for instance in instances {
            if !ids.insert(instance.id.as_str()) {
                return Err(TreeError::DuplicateId(instance.id.clone()));
            }
        }

        let mut roots: Vec<&ComponentInstance> = Vec::new();
        let mut children: HashMap<&str, Vec<&ComponentInstance>> = HashMap::new();

        for instance in instances {
            match &instance.parent_id {
                None => roots.push(instance),
                Some(parent) => {
                    if !ids.contains(parent.as_str()) {
                        return Err(TreeError::MissingParent {
                            child: instance.id.clone(),
                            parent: parent.clone(),
                        });
                    }
                    children.entry(parent.as_str()).or_default().push(instance);
                }
            }
        }

        sort_siblings(&mut roots);
        for siblings in children.values_mut() {
            sort_siblings(siblings);
        }

        let tree = Self { roots, children };
        tree.check_acyclic(instances)?;
        Ok(tree)
    }

    /// Page roots (`parent_id == None`), in sibling order.
    pub fn roots(&self) -> &[&'a ComponentInstance] {
        &self.roots
    }

    /// Children of `id`, in sibling order.
    pub fn children_of(&self, id: &str) -> &[&'a ComponentInstance] {
        self.children.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Every node must be reachable from a root; anything left over sits on
    /// a parent cycle.
    fn check_acyclic(&self, instances: &'a [ComponentInstance]) -> Result<(), TreeError> {
        let mut visited: HashSet<&str> = HashSet::with_capacity(instances.len());
        let mut stack: Vec<&ComponentInstance> = self.roots.clone();

        while let Some(node) = stack.pop() {
            if visited.insert(node.id.as_str()) {
                stack.extend(self.children_of(&node.id).iter().copied());
            }
        }

        if visited.len() != instances.len() {
            let stray = instances
                .iter()
                .find(|i| !visited.contains(i.id.as_str()))
                .map(|i| i.id.clone())
                .unwrap_or_default();
            return Err(TreeError::Cycle(stray));
        }
        Ok(())
    }
}

fn sort_siblings(siblings: &mut [&ComponentInstance]) {
    siblings.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
}
