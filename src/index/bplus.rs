/// An order-m B+-tree supporting insertion, lookup, and ordered leaf
/// traversal.
///
/// All keys live in the leaves; internal nodes hold routing copies only.
/// Leaves are chained left to right, so a full ordered scan is one walk down
/// the leftmost spine and then along the chain. Nodes live in an index
/// arena; splits climb via the recorded descent path instead of parent
/// pointers.
pub struct BPlusTree<K> {
    nodes: Vec<Node<K>>,
    root: usize,
    order: usize,
}

struct Node<K> {
    keys: Vec<K>,
    children: Vec<usize>,
    /// Next leaf in key order; `None` for internal nodes and the last leaf.
    next: Option<usize>,
    leaf: bool,
}

impl<K: Ord + Clone> BPlusTree<K> {
    /// Creates an empty tree of the given order (maximum children per node).
    pub fn new(order: usize) -> Self {
        assert!(order >= 3, "a B+-tree needs an order of at least 3");
        Self {
            nodes: vec![Node {
                keys: Vec::new(),
                children: Vec::new(),
                next: None,
                leaf: true,
            }],
            root: 0,
            order,
        }
    }

    pub fn insert(&mut self, key: K) {
        let (leaf, mut path) = self.find_leaf(&key);
        let node = &mut self.nodes[leaf];
        let idx = node.keys.partition_point(|k| *k < key);
        node.keys.insert(idx, key);
        if self.nodes[leaf].keys.len() > self.order - 1 {
            self.split_leaf(leaf, &mut path);
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        let (leaf, _) = self.find_leaf(key);
        self.nodes[leaf].keys.binary_search(key).is_ok()
    }

    /// All keys in sorted order, read off the leaf chain.
    pub fn leaf_keys(&self) -> Vec<K> {
        let mut id = self.root;
        while !self.nodes[id].leaf {
            id = self.nodes[id].children[0];
        }
        let mut out = Vec::new();
        loop {
            let node = &self.nodes[id];
            out.extend(node.keys.iter().cloned());
            match node.next {
                Some(next) => id = next,
                None => return out,
            }
        }
    }

    /// The depth of every leaf, left to right. Balanced trees report one
    /// distinct value.
    pub fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        self.collect_leaf_depths(self.root, 0, &mut depths);
        depths
    }

    fn collect_leaf_depths(&self, id: usize, depth: usize, depths: &mut Vec<usize>) {
        let node = &self.nodes[id];
        if node.leaf {
            depths.push(depth);
        } else {
            for &child in &node.children {
                self.collect_leaf_depths(child, depth + 1, depths);
            }
        }
    }

    /// Descends to the leaf responsible for `key`, recording the ancestor
    /// path so splits can climb back up without parent pointers.
    fn find_leaf(&self, key: &K) -> (usize, Vec<usize>) {
        let mut path = Vec::new();
        let mut id = self.root;
        while !self.nodes[id].leaf {
            path.push(id);
            let node = &self.nodes[id];
            let idx = node.keys.partition_point(|k| k <= key);
            id = node.children[idx];
        }
        (id, path)
    }

    fn split_leaf(&mut self, leaf: usize, path: &mut Vec<usize>) {
        let mid = (self.order - 1).div_ceil(2);
        let node = &mut self.nodes[leaf];
        let right_keys = node.keys.split_off(mid);
        let next = node.next.take();
        // The smallest key of the new right leaf is copied, not moved, into
        // the parent.
        let split_key = right_keys[0].clone();
        let right = self.nodes.len();
        self.nodes.push(Node {
            keys: right_keys,
            children: Vec::new(),
            next,
            leaf: true,
        });
        self.nodes[leaf].next = Some(right);
        self.insert_into_parent(leaf, split_key, right, path);
    }

    fn split_internal(&mut self, id: usize, path: &mut Vec<usize>) {
        let mid = self.order.div_ceil(2);
        let node = &mut self.nodes[id];
        let right_keys = node.keys.split_off(mid);
        // The median moves up; it routes between the two halves and is not
        // duplicated below.
        let split_key = node.keys.pop().expect("overflowing node has keys");
        let right_children = node.children.split_off(mid);
        let right = self.nodes.len();
        self.nodes.push(Node {
            keys: right_keys,
            children: right_children,
            next: None,
            leaf: false,
        });
        self.insert_into_parent(id, split_key, right, path);
    }

    fn insert_into_parent(&mut self, left: usize, key: K, right: usize, path: &mut Vec<usize>) {
        let Some(parent) = path.pop() else {
            // Splitting the root: the tree grows in height.
            let new_root = self.nodes.len();
            self.nodes.push(Node {
                keys: vec![key],
                children: vec![left, right],
                next: None,
                leaf: false,
            });
            self.root = new_root;
            return;
        };

        let node = &mut self.nodes[parent];
        let idx = node.keys.partition_point(|k| *k < key);
        node.keys.insert(idx, key);
        node.children.insert(idx + 1, right);
        if self.nodes[parent].keys.len() > self.order - 1 {
            self.split_internal(parent, path);
        }
    }
}
