/// Disjoint sets over the indices `0..n`, with union by size and path halving.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn components(&self) -> usize {
        self.components
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut node = x;
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    pub fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }

        let (root, parent) = if self.size[root_x] >= self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        self.parent[root] = parent;
        self.size[parent] += self.size[root];
        self.components -= 1;
    }

    /// Group `0..n` by representative. Groups are ordered by their smallest member, and members
    /// within a group are ascending.
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let mut slot = vec![usize::MAX; self.len()];
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for i in 0..self.len() {
            let root = self.find(i);
            if slot[root] == usize::MAX {
                slot[root] = groups.len();
                groups.push(Vec::new());
            }
            groups[slot[root]].push(i);
        }
        groups
    }
}
