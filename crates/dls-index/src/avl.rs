//! `AvlMap` — an AVL-balanced ordered map with owned, boxed nodes.
//!
//! # Why not `BTreeMap`
//!
//! The frequency index is required to expose its internal shape (parent →
//! child edges, see [`AvlMap::export_edges`]) so dashboards can render the
//! tree, which rules out the standard library's opaque B-tree.  The AVL
//! balance rule also gives a strict, testable invariant: after every insert,
//! every node's balance factor (left height − right height) is in [-1, 1].
//!
//! # Ownership
//!
//! Each child link is an `Option<Box<Node>>` with exactly one owner and no
//! parent pointers; traversal is always top-down, and rotations move whole
//! subtrees by taking and reattaching the boxes.
//!
//! Keys are never deleted — the only mutations are structural insert and
//! in-place value update.

use std::cmp::Ordering;

// ── Node ─────────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Node<K, V> {
    key:    K,
    value:  V,
    /// Height of the subtree rooted here; a leaf has height 1.
    height: u32,
    left:   Option<Box<Node<K, V>>>,
    right:  Option<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Box<Self> {
        Box::new(Node { key, value, height: 1, left: None, right: None })
    }

    #[inline]
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Balance factor: height(left) − height(right).
    #[inline]
    fn balance(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

#[inline]
fn height<K, V>(link: &Option<Box<Node<K, V>>>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

// ── Branch ────────────────────────────────────────────────────────────────────

/// Which side of its parent a child hangs on, for structure exports.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    Left,
    Right,
}

impl Branch {
    pub fn as_str(self) -> &'static str {
        match self {
            Branch::Left  => "L",
            Branch::Right => "R",
        }
    }
}

// ── AvlMap ────────────────────────────────────────────────────────────────────

/// AVL-balanced ordered map.
///
/// Inserting an existing key overwrites its value in place without touching
/// the tree shape; inserting a new key rebalances every ancestor on the way
/// back up, so lookups stay O(log n) regardless of insertion order.
#[derive(Debug)]
pub struct AvlMap<K, V> {
    root: Option<Box<Node<K, V>>>,
    len:  usize,
}

impl<K: Ord, V> AvlMap<K, V> {
    pub fn new() -> Self {
        AvlMap { root: None, len: 0 }
    }

    /// Insert `(key, value)`.  If `key` already exists its value is
    /// overwritten and the tree shape is left untouched.
    pub fn insert(&mut self, key: K, value: V) {
        let root = self.root.take();
        self.root = Some(insert_node(root, key, value, &mut self.len));
        debug_assert!(self.is_balanced());
    }

    /// Look up `key`; `None` if absent.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Equal   => return Some(&node.value),
                Ordering::Less    => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// Mutable lookup — the hook for increment-on-search counters.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Equal   => return Some(&mut node.value),
                Ordering::Less    => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
            }
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// All `(key, value)` pairs in ascending key order.
    pub fn inorder(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len);
        inorder_walk(&self.root, &mut out);
        out
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole tree (0 when empty).
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// `true` if every node's balance factor is within [-1, 1].
    ///
    /// Always `true` unless the implementation is broken; exposed so tests
    /// and debug assertions can verify the invariant from outside.
    pub fn is_balanced(&self) -> bool {
        fn check<K, V>(link: &Option<Box<Node<K, V>>>) -> bool {
            match link {
                None => true,
                Some(n) => n.balance().abs() <= 1 && check(&n.left) && check(&n.right),
            }
        }
        check(&self.root)
    }
}

impl<K: Ord + Clone, V> AvlMap<K, V> {
    /// Parent → child edges with a left/right tag, top-down, for
    /// visualization.  Pure read-only traversal; no core semantics.
    pub fn export_edges(&self) -> Vec<(K, K, Branch)> {
        fn walk<K: Clone, V>(link: &Option<Box<Node<K, V>>>, out: &mut Vec<(K, K, Branch)>) {
            let Some(node) = link else { return };
            if let Some(left) = &node.left {
                out.push((node.key.clone(), left.key.clone(), Branch::Left));
            }
            if let Some(right) = &node.right {
                out.push((node.key.clone(), right.key.clone(), Branch::Right));
            }
            walk(&node.left, out);
            walk(&node.right, out);
        }
        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }
}

impl<K: Ord, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Insert & rebalance ────────────────────────────────────────────────────────

fn insert_node<K: Ord, V>(
    link: Option<Box<Node<K, V>>>,
    key: K,
    value: V,
    len: &mut usize,
) -> Box<Node<K, V>> {
    let Some(mut node) = link else {
        *len += 1;
        return Node::new(key, value);
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            node.left = Some(insert_node(node.left.take(), key, value, len));
        }
        Ordering::Greater => {
            node.right = Some(insert_node(node.right.take(), key, value, len));
        }
        Ordering::Equal => {
            // Value update only: heights are unchanged, skip rebalancing.
            node.value = value;
            return node;
        }
    }

    node.update_height();
    rebalance(node)
}

/// Restore the AVL invariant at `node` after one child subtree grew.
///
/// The heavy side's own balance sign distinguishes the single-rotation cases
/// (LL/RR) from the double-rotation cases (LR/RL).  For pure insertions this
/// is equivalent to comparing the freshly inserted key against the child key:
/// a left-heavy left child means the new key landed left of it.
fn rebalance<K: Ord, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let bf = node.balance();

    if bf > 1 {
        let left_bf = node.left.as_ref().map_or(0, |l| l.balance());
        if left_bf < 0 {
            // Left-Right: rotate the left child left first.
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if bf < -1 {
        let right_bf = node.right.as_ref().map_or(0, |r| r.balance());
        if right_bf > 0 {
            // Right-Left: rotate the right child right first.
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

fn rotate_left<K, V>(mut z: Box<Node<K, V>>) -> Box<Node<K, V>> {
    // A right-heavy node always has a right child.
    let mut y = z.right.take().expect("rotate_left on node without right child");
    z.right = y.left.take();
    z.update_height();
    y.left = Some(z);
    y.update_height();
    y
}

fn rotate_right<K, V>(mut z: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut y = z.left.take().expect("rotate_right on node without left child");
    z.left = y.right.take();
    z.update_height();
    y.right = Some(z);
    y.update_height();
    y
}

fn inorder_walk<'a, K, V>(link: &'a Option<Box<Node<K, V>>>, out: &mut Vec<(&'a K, &'a V)>) {
    let Some(node) = link else { return };
    inorder_walk(&node.left, out);
    out.push((&node.key, &node.value));
    inorder_walk(&node.right, out);
}
