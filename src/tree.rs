use generational_arena::{Arena, Index};
use num_traits::{Bounded, Zero};
use std::ops::Add;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::queue::Queue;
use crate::stack::Stack;

/// Binary tree node stored in the arena.
///
/// Child slots hold arena indices, None for absent children. The fields are
/// public on purpose: trees are built by direct assignment of `left`, `right`
/// and the tree's root slot, there is no guarded insert/delete API.
#[derive(Debug, Clone)]
pub struct Node<V> {
    pub value: V,
    /// Index of the left child in the arena, None for no left child
    pub left: Option<Index>,
    /// Index of the right child in the arena, None for no right child
    pub right: Option<Index>,
}

impl<V> Node<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Node with both child slots filled in, for direct construction.
    pub fn with_children(value: V, left: Option<Index>, right: Option<Index>) -> Self {
        Self { value, left, right }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-based binary tree.
///
/// Nodes live in a generational arena and reference each other by index,
/// so child slots are plain `Option<Index>` values and detached subtrees
/// simply become unreachable. The structure reachable from `root` must be a
/// finite tree (each node reachable from exactly one parent slot); this is
/// not enforced, only assumed by the traversals.
///
/// The recursive operations recurse to tree height; a degenerate,
/// near-linear tree can exhaust the call stack. The iterative traversals
/// are unaffected.
#[derive(Debug, Clone)]
pub struct BinaryTree<V> {
    arena: Arena<Node<V>>,
    root: Option<Index>,
}

impl<V> Default for BinaryTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BinaryTree<V> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Allocates a node without attaching it anywhere.
    ///
    /// Pair with [`set_root`](Self::set_root) or direct `left`/`right`
    /// assignment through [`node_mut`](Self::node_mut).
    #[instrument(level = "trace", skip_all)]
    pub fn alloc(&mut self, node: Node<V>) -> Index {
        self.arena.insert(node)
    }

    /// Allocates a leaf node holding `value` and makes it the root.
    ///
    /// Any previous root subtree stays allocated but becomes unreachable.
    #[instrument(level = "trace", skip_all)]
    pub fn insert_root(&mut self, value: V) -> Index {
        let idx = self.arena.insert(Node::new(value));
        self.root = Some(idx);
        idx
    }

    /// Allocates a leaf node holding `value` and attaches it as the left
    /// child of `parent`, replacing any previous left subtree.
    #[instrument(level = "trace", skip_all)]
    pub fn insert_left(&mut self, parent: Index, value: V) -> TreeResult<Index> {
        if !self.arena.contains(parent) {
            return Err(TreeError::NodeNotFound(parent));
        }
        let idx = self.arena.insert(Node::new(value));
        self.arena[parent].left = Some(idx);
        Ok(idx)
    }

    /// Allocates a leaf node holding `value` and attaches it as the right
    /// child of `parent`, replacing any previous right subtree.
    #[instrument(level = "trace", skip_all)]
    pub fn insert_right(&mut self, parent: Index, value: V) -> TreeResult<Index> {
        if !self.arena.contains(parent) {
            return Err(TreeError::NodeNotFound(parent));
        }
        let idx = self.arena.insert(Node::new(value));
        self.arena[parent].right = Some(idx);
        Ok(idx)
    }

    pub fn node(&self, idx: Index) -> Option<&Node<V>> {
        self.arena.get(idx)
    }

    /// Mutable node access, for direct assignment of `left`/`right` slots.
    pub fn node_mut(&mut self, idx: Index) -> Option<&mut Node<V>> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Reassigns the root slot. Passing None empties the tree without
    /// deallocating nodes.
    pub fn set_root(&mut self, root: Option<Index>) {
        self.root = root;
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of allocated nodes, including detached subtrees.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Height of the tree in nodes: 0 for an empty tree, 1 for a lone root.
    #[instrument(level = "trace", skip_all)]
    pub fn depth(&self) -> usize {
        self.subtree_depth(self.root)
    }

    fn subtree_depth(&self, node: Option<Index>) -> usize {
        match node.and_then(|idx| self.arena.get(idx)) {
            Some(node) => 1 + self.subtree_depth(node.left).max(self.subtree_depth(node.right)),
            None => 0,
        }
    }

    /// Borrowing pre-order iterator over `(Index, &Node<V>)`.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }
}

impl<V: Clone> BinaryTree<V> {
    /// Iterative pre-order depth-first traversal.
    ///
    /// Uses an explicit stack: pop a node, record its value, then push the
    /// right child before the left one, so the left subtree is fully
    /// processed first despite the LIFO discipline. Empty tree yields an
    /// empty sequence.
    #[instrument(level = "trace", skip_all)]
    pub fn depth_first(&self) -> Vec<V> {
        let mut values = Vec::new();
        let mut stack = Stack::new();
        if let Some(root) = self.root {
            stack.push(root);
        }

        while let Some(idx) = stack.pop() {
            if let Some(node) = self.arena.get(idx) {
                values.push(node.value.clone());
                if let Some(right) = node.right {
                    stack.push(right);
                }
                if let Some(left) = node.left {
                    stack.push(left);
                }
            }
        }

        values
    }

    /// Recursive pre-order depth-first traversal of the whole tree.
    ///
    /// Produces the same sequence as [`depth_first`](Self::depth_first) for
    /// any tree.
    #[instrument(level = "trace", skip_all)]
    pub fn depth_first_recursive(&self) -> Vec<V> {
        let mut values = Vec::new();
        self.collect_preorder(self.root, &mut values);
        values
    }

    /// Recursive pre-order traversal of the subtree rooted at `node`.
    #[instrument(level = "trace", skip_all)]
    pub fn depth_first_from(&self, node: Index) -> Vec<V> {
        let mut values = Vec::new();
        self.collect_preorder(Some(node), &mut values);
        values
    }

    fn collect_preorder(&self, node: Option<Index>, values: &mut Vec<V>) {
        if let Some(node) = node.and_then(|idx| self.arena.get(idx)) {
            values.push(node.value.clone());
            self.collect_preorder(node.left, values);
            self.collect_preorder(node.right, values);
        }
    }

    /// Level-order breadth-first traversal, left to right within a level.
    ///
    /// Uses an explicit queue: dequeue a node, record its value, enqueue the
    /// left child then the right one (the mirror of the depth-first push
    /// order, because the queue is FIFO). Empty tree yields an empty
    /// sequence.
    #[instrument(level = "trace", skip_all)]
    pub fn breadth_first(&self) -> Vec<V> {
        let mut values = Vec::new();
        let mut queue = Queue::new();
        if let Some(root) = self.root {
            queue.enqueue(root);
        }

        while let Some(idx) = queue.dequeue() {
            if let Some(node) = self.arena.get(idx) {
                values.push(node.value.clone());
                if let Some(left) = node.left {
                    queue.enqueue(left);
                }
                if let Some(right) = node.right {
                    queue.enqueue(right);
                }
            }
        }

        values
    }
}

impl<V: PartialEq> BinaryTree<V> {
    /// Recursive short-circuiting presence check: root, then left, then
    /// right.
    #[instrument(level = "trace", skip_all)]
    pub fn contains(&self, target: &V) -> bool {
        self.subtree_contains(self.root, target)
    }

    fn subtree_contains(&self, node: Option<Index>, target: &V) -> bool {
        match node.and_then(|idx| self.arena.get(idx)) {
            Some(node) => {
                node.value == *target
                    || self.subtree_contains(node.left, target)
                    || self.subtree_contains(node.right, target)
            }
            None => false,
        }
    }
}

impl<V: Copy + Zero> BinaryTree<V> {
    /// Sum of all values in the tree.
    ///
    /// The sum of an empty subtree is the additive identity, so an empty
    /// tree sums to zero. Overflow defers to the numeric type's native
    /// behavior.
    #[instrument(level = "trace", skip_all)]
    pub fn total_sum(&self) -> V {
        self.subtree_sum(self.root)
    }

    fn subtree_sum(&self, node: Option<Index>) -> V {
        match node.and_then(|idx| self.arena.get(idx)) {
            Some(node) => node.value + self.subtree_sum(node.left) + self.subtree_sum(node.right),
            None => V::zero(),
        }
    }
}

impl<V> BinaryTree<V>
where
    V: Copy + Bounded + PartialOrd + Add<Output = V>,
{
    /// Maximum sum over all root-to-leaf paths.
    ///
    /// A leaf contributes its own value; an internal node contributes its
    /// value plus the larger of its children's path sums. An absent child
    /// reports the type's minimum value, a sentinel that never wins the
    /// comparison against a real path, so nodes with zero, one or two
    /// children take the same formula. The sentinel is only compared, never
    /// added: the leaf check runs before recursing.
    ///
    /// Errors with [`TreeError::EmptyTree`] on an empty tree.
    #[instrument(level = "trace", skip_all)]
    pub fn max_root_to_leaf_path_sum(&self) -> TreeResult<V> {
        match self.root {
            Some(root) => Ok(self.max_path_sum_from(Some(root))),
            None => Err(TreeError::EmptyTree),
        }
    }

    fn max_path_sum_from(&self, node: Option<Index>) -> V {
        match node.and_then(|idx| self.arena.get(idx)) {
            Some(node) => {
                if node.is_leaf() {
                    return node.value;
                }
                let left = self.max_path_sum_from(node.left);
                let right = self.max_path_sum_from(node.right);
                node.value + if left > right { left } else { right }
            }
            None => V::min_value(),
        }
    }
}

pub struct Iter<'a, V> {
    tree: &'a BinaryTree<V>,
    stack: Vec<Index>,
}

impl<'a, V> Iter<'a, V> {
    fn new(tree: &'a BinaryTree<V>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Index, &'a Node<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.tree.node(idx)?;
        // Right pushed first so the left subtree is drained before it
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some((idx, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //        1
    //       / \
    //      2   3
    //     /
    //    4
    fn small_tree() -> BinaryTree<i32> {
        let mut tree = BinaryTree::new();
        let root = tree.insert_root(1);
        let left = tree.insert_left(root, 2).unwrap();
        tree.insert_right(root, 3).unwrap();
        tree.insert_left(left, 4).unwrap();
        tree
    }

    #[test]
    fn test_insert_root_replaces_previous_root() {
        let mut tree = BinaryTree::new();
        tree.insert_root(1);
        tree.insert_root(2);

        assert_eq!(tree.depth_first(), vec![2]);
    }

    #[test]
    fn test_insert_on_stale_index_errors() {
        let mut detached = BinaryTree::new();
        let foreign = detached.insert_root(1);

        let mut tree: BinaryTree<i32> = BinaryTree::new();
        assert_eq!(
            tree.insert_left(foreign, 2),
            Err(TreeError::NodeNotFound(foreign))
        );
        assert_eq!(
            tree.insert_right(foreign, 2),
            Err(TreeError::NodeNotFound(foreign))
        );
    }

    #[test]
    fn test_alloc_and_with_children_build_bottom_up() {
        let mut tree = BinaryTree::new();
        let left = tree.alloc(Node::new(2));
        let right = tree.alloc(Node::new(3));
        let root = tree.alloc(Node::with_children(1, Some(left), Some(right)));
        tree.set_root(Some(root));

        assert_eq!(tree.breadth_first(), vec![1, 2, 3]);
    }

    #[test]
    fn test_direct_child_assignment() {
        let mut tree = BinaryTree::new();
        let root = tree.insert_root(1);
        let orphan = tree.insert_left(root, 2).unwrap();

        // Detach and reattach on the other side by direct slot assignment
        tree.node_mut(root).unwrap().left = None;
        tree.node_mut(root).unwrap().right = Some(orphan);

        assert_eq!(tree.depth_first(), vec![1, 2]);
        assert_eq!(tree.node(root).unwrap().left, None);
    }

    #[test]
    fn test_depth() {
        assert_eq!(BinaryTree::<i32>::new().depth(), 0);
        assert_eq!(small_tree().depth(), 3);
    }

    #[test]
    fn test_iter_matches_depth_first() {
        let tree = small_tree();
        let via_iter: Vec<i32> = tree.iter().map(|(_, node)| node.value).collect();

        assert_eq!(via_iter, tree.depth_first());
    }

    #[test]
    fn test_set_root_to_none_empties_tree() {
        let mut tree = small_tree();
        tree.set_root(None);

        assert!(tree.is_empty());
        assert_eq!(tree.depth_first(), Vec::<i32>::new());
        // Nodes stay allocated, only unreachable
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_is_leaf() {
        let tree = small_tree();
        let root = tree.root().unwrap();

        assert!(!tree.node(root).unwrap().is_leaf());
        let leaf_count = tree.iter().filter(|(_, n)| n.is_leaf()).count();
        assert_eq!(leaf_count, 2);
    }
}
