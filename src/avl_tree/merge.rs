//! Linear-time union: merge two in-order sequences, then shape the merged run into a
//! nearly-complete binary tree.

use crate::arena::{Arena, Handle};
use crate::avl_tree::compare::Comparator;
use crate::avl_tree::node::{self, Node};
use std::cmp::{self, Ordering};

/// Where a merged value came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Source {
    Left(Handle),
    Right(Handle),
}

/// Merges two ascending sequences of `(handle, value)` pairs into one ascending sequence without
/// duplicates. Values that compare equal are collapsed into the one from `left`.
pub fn merge<'a, 'b, T, C, L, R>(left: L, right: R, comparator: &C) -> Vec<Source>
where
    T: 'a + 'b,
    C: Comparator<T>,
    L: Iterator<Item = (Handle, &'a T)>,
    R: Iterator<Item = (Handle, &'b T)>,
{
    let mut left = left.peekable();
    let mut right = right.peekable();
    let (left_len, _) = left.size_hint();
    let (right_len, _) = right.size_hint();
    let mut ret = Vec::with_capacity(left_len + right_len);

    loop {
        let order = match (left.peek(), right.peek()) {
            (Some(&(_, l)), Some(&(_, r))) => comparator.compare(l, r),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => break,
        };

        match order {
            Ordering::Less => {
                if let Some((handle, _)) = left.next() {
                    ret.push(Source::Left(handle));
                }
            },
            Ordering::Greater => {
                if let Some((handle, _)) = right.next() {
                    ret.push(Source::Right(handle));
                }
            },
            Ordering::Equal => {
                right.next();
                if let Some((handle, _)) = left.next() {
                    ret.push(Source::Left(handle));
                }
            },
        }
    }

    ret
}

/// Returns the number of nodes in the left subtree of the nearly-complete binary tree with `len`
/// nodes, where every level is full except the last, which fills from the left.
pub fn left_subtree_len(len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let height = (0usize.count_zeros() - 1 - len.leading_zeros()) as usize;
    let half = 1usize << (height - 1);
    let last_level = len - (1usize << height) + 1;
    half - 1 + cmp::min(last_level, half)
}

/// Links the nodes in `handles`, which must already be in ascending order, into a nearly-complete
/// binary tree and returns its root. Parent links and heights are set on every node; nothing is
/// rotated.
pub fn build<T>(nodes: &mut Arena<Node<T>>, handles: &[Handle], parent: Option<Handle>) -> Option<Handle> {
    if handles.is_empty() {
        return None;
    }

    let left_len = left_subtree_len(handles.len());
    let root = handles[left_len];
    let left = build(nodes, &handles[..left_len], Some(root));
    let right = build(nodes, &handles[left_len + 1..], Some(root));

    {
        let node = &mut nodes[root];
        node.parent = parent;
        node.left = left;
        node.right = right;
    }
    node::update(nodes, root);
    Some(root)
}

#[cfg(test)]
mod tests {
    use super::{build, left_subtree_len, merge, Source};
    use crate::arena::{Arena, Handle};
    use crate::avl_tree::compare::Natural;
    use crate::avl_tree::node::{self, Node};

    fn pairs(arena: &mut Arena<u32>, values: &[u32]) -> Vec<Handle> {
        values.iter().map(|value| arena.allocate(*value)).collect()
    }

    #[test]
    fn test_left_subtree_len() {
        assert_eq!(left_subtree_len(0), 0);
        assert_eq!(left_subtree_len(1), 0);
        assert_eq!(left_subtree_len(2), 1);
        assert_eq!(left_subtree_len(3), 1);
        assert_eq!(left_subtree_len(4), 2);
        assert_eq!(left_subtree_len(6), 3);
        assert_eq!(left_subtree_len(7), 3);
        assert_eq!(left_subtree_len(10), 6);
        assert_eq!(left_subtree_len(13), 7);
        assert_eq!(left_subtree_len(15), 7);
    }

    #[test]
    fn test_merge_collapses_duplicates() {
        let mut arena = Arena::new();
        let left = pairs(&mut arena, &[1, 3, 5]);
        let right = pairs(&mut arena, &[2, 3, 6]);

        let merged = merge(
            left.iter().map(|handle| (*handle, &arena[*handle])),
            right.iter().map(|handle| (*handle, &arena[*handle])),
            &Natural,
        );

        assert_eq!(
            merged,
            vec![
                Source::Left(left[0]),
                Source::Right(right[0]),
                Source::Left(left[1]),
                Source::Left(left[2]),
                Source::Right(right[2]),
            ],
        );
    }

    #[test]
    fn test_merge_empty() {
        let arena: Arena<u32> = Arena::new();
        let none: Vec<Handle> = Vec::new();
        let merged = merge(
            none.iter().map(|handle| (*handle, &arena[*handle])),
            none.iter().map(|handle| (*handle, &arena[*handle])),
            &Natural,
        );
        assert!(merged.is_empty());
    }

    #[test]
    fn test_build_shape() {
        let mut nodes = Arena::new();
        let handles = (0..10u32)
            .map(|value| nodes.allocate(Node::new(value, None)))
            .collect::<Vec<Handle>>();

        let root = build(&mut nodes, &handles, None).unwrap();

        assert_eq!(nodes[root].value, 6);
        assert_eq!(nodes[root].height, 3);
        assert_eq!(nodes[root].parent, None);
        for handle in &handles {
            let balance = node::balance_factor(&nodes, Some(*handle));
            assert!(balance >= -1 && balance <= 1);
            if let Some(left) = nodes[*handle].left {
                assert_eq!(nodes[left].parent, Some(*handle));
                assert!(nodes[left].value < nodes[*handle].value);
            }
            if let Some(right) = nodes[*handle].right {
                assert_eq!(nodes[right].parent, Some(*handle));
                assert!(nodes[right].value > nodes[*handle].value);
            }
        }
    }

    #[test]
    fn test_build_empty() {
        let mut nodes: Arena<Node<u32>> = Arena::new();
        assert_eq!(build(&mut nodes, &[], None), None);
    }
}
