use std::hash::Hash;

use hashbrown::HashMap;

/// Disjoint-set forest over arbitrary node handles.
///
/// Nodes are registered lazily the first time they are looked up. Lookups use path halving,
/// unions do no balancing.
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parents: HashMap<T, T>,
}

impl<T> UnionFind<T>
where
    T: Hash + Eq + Copy,
{
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parents: HashMap::with_capacity(capacity),
        }
    }

    /// Representative of the component containing `node`.
    pub fn root(&mut self, node: T) -> T {
        self.parents.entry(node).or_insert(node);

        let mut current = node;
        loop {
            let parent = self.parents[&current];
            if parent == current {
                return current;
            }

            // path halving: skip over the parent
            let grandparent = self.parents[&parent];
            self.parents.insert(current, grandparent);
            current = grandparent;
        }
    }

    /// Merges the components of `a` and `b`.
    ///
    /// Returns `false` if they were already the same component.
    pub fn join(&mut self, a: T, b: T) -> bool {
        let root_a = self.root(a);
        let root_b = self.root(b);

        if root_a == root_b {
            return false;
        }

        self.parents.insert(root_a, root_b);
        true
    }

    pub fn joined(&mut self, a: T, b: T) -> bool {
        self.root(a) == self.root(b)
    }

    /// Number of distinct components among the registered nodes.
    pub fn component_count(&self) -> usize {
        self.parents
            .iter()
            .filter(|(node, parent)| node == parent)
            .count()
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl<T> Default for UnionFind<T>
where
    T: Hash + Eq + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
