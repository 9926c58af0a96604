//! Generic in-memory data structures for learning and reuse: a stack, a
//! queue, a singly linked list, and an arena-based binary tree with
//! depth-first/breadth-first traversals and recursive aggregations
//! (presence check, subtree sum, maximum root-to-leaf path sum).
//!
//! Trees are built by direct construction: allocate nodes, then assign the
//! root and child slots. There is no insertion or balancing algorithm.
//!
//! ```
//! use dskit::tree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! let root = tree.insert_root(5);
//! let left = tree.insert_left(root, 11).unwrap();
//! tree.insert_right(root, 3).unwrap();
//! tree.insert_left(left, 4).unwrap();
//!
//! assert_eq!(tree.breadth_first(), vec![5, 11, 3, 4]);
//! assert_eq!(tree.total_sum(), 23);
//! assert_eq!(tree.max_root_to_leaf_path_sum(), Ok(20));
//! ```

pub mod errors;
pub mod linked_list;
pub mod queue;
pub mod render;
pub mod stack;
pub mod tree;
pub mod util;

pub use errors::{ListError, ListResult, TreeError, TreeResult};
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use render::TreeRender;
pub use stack::Stack;
pub use tree::{BinaryTree, Node};
