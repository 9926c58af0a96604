use std::fmt::Display;

use generational_arena::Index;
use termtree::Tree;

use crate::tree::BinaryTree;

/// Renders a structure as an ASCII tree for terminal display.
pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<V: Display> TreeRender for BinaryTree<V> {
    fn to_tree_string(&self) -> Tree<String> {
        fn build<V: Display>(tree: &BinaryTree<V>, idx: Index, out: &mut Tree<String>) {
            if let Some(node) = tree.node(idx) {
                for child_idx in [node.left, node.right].into_iter().flatten() {
                    if let Some(child) = tree.node(child_idx) {
                        let mut child_tree = Tree::new(child.value.to_string());
                        build(tree, child_idx, &mut child_tree);
                        out.push(child_tree);
                    }
                }
            }
        }

        match self.root().and_then(|idx| self.node(idx).map(|n| (idx, n))) {
            Some((root_idx, root)) => {
                let mut out = Tree::new(root.value.to_string());
                build(self, root_idx, &mut out);
                out
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_all_values() {
        let mut tree = BinaryTree::new();
        let root = tree.insert_root("a");
        let left = tree.insert_left(root, "b").unwrap();
        tree.insert_right(root, "c").unwrap();
        tree.insert_left(left, "d").unwrap();

        let rendered = tree.to_tree_string().to_string();
        for value in ["a", "b", "c", "d"] {
            assert!(rendered.contains(value), "missing {value} in:\n{rendered}");
        }
    }

    #[test]
    fn test_empty_tree_placeholder() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        assert_eq!(tree.to_tree_string().to_string().trim(), "Empty tree");
    }
}
