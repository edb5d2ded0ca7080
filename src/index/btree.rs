/// An order-m B-tree supporting insertion and ordered traversal.
///
/// Insertion splits full nodes pre-emptively on the way down, so no split
/// ever propagates back upward: when the root is full it is split before
/// descending, which is the only place the tree grows in height.
pub struct BTree<K> {
    root: Node<K>,
    /// Minimum degree: a node holds at most 2t - 1 keys and t..=2t children.
    t: usize,
}

struct Node<K> {
    keys: Vec<K>,
    children: Vec<Node<K>>,
    leaf: bool,
}

impl<K: Ord> BTree<K> {
    /// Creates an empty tree of the given order (maximum children per node).
    pub fn new(order: usize) -> Self {
        assert!(order >= 3, "a B-tree needs an order of at least 3");
        Self {
            root: Node {
                keys: Vec::new(),
                children: Vec::new(),
                leaf: true,
            },
            t: order.div_ceil(2),
        }
    }

    pub fn insert(&mut self, key: K) {
        if self.root.is_full(self.t) {
            // Root is full, so the tree grows in height.
            let old_root = std::mem::replace(
                &mut self.root,
                Node {
                    keys: Vec::new(),
                    children: Vec::new(),
                    leaf: false,
                },
            );
            self.root.children.push(old_root);
            self.root.split_child(0, self.t);
            let i = usize::from(key > self.root.keys[0]);
            self.root.children[i].insert_non_full(key, self.t);
        } else {
            self.root.insert_non_full(key, self.t);
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut node = &self.root;
        loop {
            let idx = node.keys.partition_point(|k| k < key);
            if idx < node.keys.len() && node.keys[idx] == *key {
                return true;
            }
            if node.leaf {
                return false;
            }
            node = &node.children[idx];
        }
    }

    /// In-order traversal of the tree keys.
    pub fn traverse(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::new();
        self.root.collect_in_order(&mut out);
        out
    }

    #[cfg(test)]
    fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        self.root.collect_leaf_depths(0, &mut depths);
        depths
    }
}

impl<K: Ord> Node<K> {
    fn is_full(&self, t: usize) -> bool {
        self.keys.len() == 2 * t - 1
    }

    fn insert_non_full(&mut self, key: K, t: usize) {
        if self.leaf {
            let idx = self.keys.partition_point(|k| *k <= key);
            self.keys.insert(idx, key);
        } else {
            let mut idx = self.keys.partition_point(|k| *k <= key);
            // Pre-emptive split: if the target child is full, split it first.
            if self.children[idx].is_full(t) {
                self.split_child(idx, t);
                if key > self.keys[idx] {
                    idx += 1;
                }
            }
            self.children[idx].insert_non_full(key, t);
        }
    }

    /// Splits the full child at `children[index]`, promoting its median key
    /// into this node.
    fn split_child(&mut self, index: usize, t: usize) {
        let child = &mut self.children[index];
        let right_keys = child.keys.split_off(t);
        let median = child.keys.pop().expect("full child has 2t - 1 keys");
        let right_children = if child.leaf {
            Vec::new()
        } else {
            child.children.split_off(t)
        };
        let right = Node {
            keys: right_keys,
            children: right_children,
            leaf: child.leaf,
        };
        self.children.insert(index + 1, right);
        self.keys.insert(index, median);
    }

    fn collect_in_order(&self, out: &mut Vec<K>)
    where
        K: Clone,
    {
        for (i, key) in self.keys.iter().enumerate() {
            if !self.leaf {
                self.children[i].collect_in_order(out);
            }
            out.push(key.clone());
        }
        if !self.leaf {
            self.children[self.keys.len()].collect_in_order(out);
        }
    }

    #[cfg(test)]
    fn collect_leaf_depths(&self, depth: usize, depths: &mut Vec<usize>) {
        if self.leaf {
            depths.push(depth);
        } else {
            for child in &self.children {
                child.collect_leaf_depths(depth + 1, depths);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{Lcg, RandomSource};

    fn check_node<K: Ord>(node: &Node<K>, is_root: bool, t: usize) {
        assert!(node.keys.len() <= 2 * t - 1, "node overflows its order");
        if !is_root {
            assert!(node.keys.len() >= t - 1, "non-root node underflows");
        }
        assert!(node.keys.is_sorted());
        if !node.leaf {
            assert_eq!(node.children.len(), node.keys.len() + 1);
            for child in &node.children {
                check_node(child, false, t);
            }
        }
    }

    #[test]
    fn inserting_sorted_keys_keeps_them_sorted() {
        let mut tree = BTree::new(4);
        for key in 0..50 {
            tree.insert(key);
        }
        assert_eq!(tree.traverse(), (0..50).collect::<Vec<_>>());
        check_node(&tree.root, true, tree.t);
    }

    #[test]
    fn shuffled_insertion_yields_sorted_traversal_and_equal_depths() {
        let mut keys: Vec<u32> = (0..30).collect();
        Lcg::new(99).shuffle(&mut keys);

        let mut tree = BTree::new(4);
        for &key in &keys {
            tree.insert(key);
        }

        assert_eq!(tree.traverse(), (0..30).collect::<Vec<_>>());
        check_node(&tree.root, true, tree.t);

        let depths = tree.leaf_depths();
        assert!(depths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn contains_finds_exactly_the_inserted_keys() {
        let mut tree = BTree::new(5);
        for key in [23, 65, 37, 60, 46, 92, 48, 71, 56, 59] {
            tree.insert(key);
        }
        assert!(tree.contains(&37));
        assert!(tree.contains(&92));
        assert!(!tree.contains(&38));
        assert!(!tree.contains(&0));
    }
}
