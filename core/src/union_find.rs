//! Disjoint-set (union-find) weighted by component size, with path halving.

use serde::{Deserialize, Serialize};

use crate::types::SiteIndex;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionFind {
    parent: Vec<SiteIndex>,
    size: Vec<SiteIndex>,
}

impl UnionFind {
    /// Creates `n` singleton components.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `x`, pointing every visited node at its
    /// grandparent on the way up.
    pub fn find(&mut self, mut x: SiteIndex) -> SiteIndex {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Returns the representative of `x` without compressing the path.
    pub fn root(&self, mut x: SiteIndex) -> SiteIndex {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Union by size. Returns `true` if `a` and `b` were in different components.
    pub fn union(&mut self, a: SiteIndex, b: SiteIndex) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        let (small, large) = if self.size[ra] < self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        true
    }

    pub fn connected(&self, a: SiteIndex, b: SiteIndex) -> bool {
        self.root(a) == self.root(b)
    }

    pub fn component_size(&self, x: SiteIndex) -> usize {
        self.size[self.root(x)]
    }
}
