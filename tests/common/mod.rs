use avl_union::avl_tree::{AvlTree, NodeRef};
use std::cmp;
use std::fmt::Debug;

// Checks the subtree rooted at `node` and returns (height, size, min, max).
fn validate_node<'a, T>(node: NodeRef<'a, T>) -> (isize, usize, &'a T, &'a T)
where
    T: Ord + Debug,
{
    let mut min = node.value();
    let mut max = node.value();
    let mut size = 1;

    let left_height = match node.left() {
        None => -1,
        Some(left) => {
            assert!(left.parent().map_or(false, |parent| parent.ptr_eq(&node)));
            let (height, left_size, left_min, left_max) = validate_node(left);
            assert!(left_max < node.value(), "{:?} is not below {:?}", left_max, node.value());
            min = left_min;
            size += left_size;
            height
        },
    };

    let right_height = match node.right() {
        None => -1,
        Some(right) => {
            assert!(right.parent().map_or(false, |parent| parent.ptr_eq(&node)));
            let (height, right_size, right_min, right_max) = validate_node(right);
            assert!(right_min > node.value(), "{:?} is not above {:?}", right_min, node.value());
            max = right_max;
            size += right_size;
            height
        },
    };

    assert!((left_height - right_height).abs() <= 1, "unbalanced at {:?}", node.value());
    let height = cmp::max(left_height, right_height) + 1;
    assert_eq!(node.height() as isize, height, "stale height at {:?}", node.value());

    (height, size, min, max)
}

/// Asserts every structural invariant of `tree`: ordering, balance, cached heights, size, cached
/// extremes and parent links.
pub fn validate<T>(tree: &AvlTree<T>)
where
    T: Ord + Debug,
{
    match tree.root() {
        None => {
            assert_eq!(tree.len(), 0);
            assert!(tree.is_empty());
            assert_eq!(tree.height(), -1);
            assert_eq!(tree.min(), None);
            assert_eq!(tree.max(), None);
        },
        Some(root) => {
            assert!(root.parent().is_none());
            let (height, size, min, max) = validate_node(root);
            assert_eq!(tree.height(), height);
            assert_eq!(tree.len(), size);
            assert_eq!(tree.min(), Some(min));
            assert_eq!(tree.max(), Some(max));
            assert_eq!(tree.iter().count(), size);
        },
    }
}

/// Height of the nearly-complete binary tree with `len` nodes.
pub fn nearly_complete_height(len: usize) -> isize {
    if len == 0 {
        -1
    } else {
        (0usize.count_zeros() - 1 - len.leading_zeros()) as isize
    }
}
