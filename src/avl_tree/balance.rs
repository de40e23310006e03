//! Rotations and the rebalance-to-root walk.
//!
//! Every function takes the node arena together with the root slot of the tree, since a rotation
//! at the top of the tree changes which node is the root.

use crate::arena::{Arena, Handle};
use crate::avl_tree::node::{self, Node};
use log::trace;

/// Points the slot that held `old` (a child link of `parent`, or the root) at `new`.
pub fn replace_child<T>(
    nodes: &mut Arena<Node<T>>,
    root: &mut Option<Handle>,
    parent: Option<Handle>,
    old: Handle,
    new: Option<Handle>,
) {
    match parent {
        None => *root = new,
        Some(parent) => {
            let parent = &mut nodes[parent];
            if parent.left == Some(old) {
                parent.left = new;
            } else {
                parent.right = new;
            }
        },
    }
}

//          A      |        B
//        /   \    |      /   \
//       B    Ar   |    Bl     A
//     /   \       |         /   \
//    Bl   Br      |        Br   Ar
//
// Returns the node now occupying the position of `a`.
pub fn rotate_right<T>(nodes: &mut Arena<Node<T>>, root: &mut Option<Handle>, a: Handle) -> Handle {
    let b = match nodes[a].left {
        Some(b) => b,
        None => return a,
    };
    let parent = nodes[a].parent;
    let br = nodes[b].right;

    nodes[a].left = br;
    if let Some(br) = br {
        nodes[br].parent = Some(a);
    }
    nodes[b].right = Some(a);
    nodes[a].parent = Some(b);
    nodes[b].parent = parent;
    replace_child(nodes, root, parent, a, Some(b));

    node::update(nodes, a);
    node::update(nodes, b);
    trace!("rotated right at {:?}, {:?} takes its place", a, b);
    b
}

//        A        |        B
//      /   \      |      /   \
//    Al     B     |     A     Br
//         /   \   |   /   \
//        Bl   Br  |  Al   Bl
pub fn rotate_left<T>(nodes: &mut Arena<Node<T>>, root: &mut Option<Handle>, a: Handle) -> Handle {
    let b = match nodes[a].right {
        Some(b) => b,
        None => return a,
    };
    let parent = nodes[a].parent;
    let bl = nodes[b].left;

    nodes[a].right = bl;
    if let Some(bl) = bl {
        nodes[bl].parent = Some(a);
    }
    nodes[b].left = Some(a);
    nodes[a].parent = Some(b);
    nodes[b].parent = parent;
    replace_child(nodes, root, parent, a, Some(b));

    node::update(nodes, a);
    node::update(nodes, b);
    trace!("rotated left at {:?}, {:?} takes its place", a, b);
    b
}

pub fn rotate_ll<T>(nodes: &mut Arena<Node<T>>, root: &mut Option<Handle>, handle: Handle) -> Handle {
    if nodes[handle].left.is_none() {
        return handle;
    }
    rotate_right(nodes, root, handle)
}

pub fn rotate_lr<T>(nodes: &mut Arena<Node<T>>, root: &mut Option<Handle>, handle: Handle) -> Handle {
    let left = match nodes[handle].left {
        Some(left) => left,
        None => return handle,
    };
    rotate_left(nodes, root, left);
    rotate_right(nodes, root, handle)
}

pub fn rotate_rl<T>(nodes: &mut Arena<Node<T>>, root: &mut Option<Handle>, handle: Handle) -> Handle {
    let right = match nodes[handle].right {
        Some(right) => right,
        None => return handle,
    };
    rotate_right(nodes, root, right);
    rotate_left(nodes, root, handle)
}

pub fn rotate_rr<T>(nodes: &mut Arena<Node<T>>, root: &mut Option<Handle>, handle: Handle) -> Handle {
    if nodes[handle].right.is_none() {
        return handle;
    }
    rotate_left(nodes, root, handle)
}

/// Walks from `start` up to the root, refreshing heights and rotating away any imbalance found.
///
/// The walk never stops early, so the same procedure repairs the tree after an insertion (one
/// rotation at most) and after a removal (possibly one rotation per ancestor).
pub fn rebalance<T>(nodes: &mut Arena<Node<T>>, root: &mut Option<Handle>, start: Option<Handle>) {
    let mut curr = start;
    while let Some(handle) = curr {
        node::update(nodes, handle);

        let balance = node::balance_factor(nodes, Some(handle));
        let top = if balance >= 2 {
            if node::balance_factor(nodes, nodes[handle].left) >= 0 {
                rotate_ll(nodes, root, handle)
            } else {
                rotate_lr(nodes, root, handle)
            }
        } else if balance <= -2 {
            if node::balance_factor(nodes, nodes[handle].right) <= 0 {
                rotate_rr(nodes, root, handle)
            } else {
                rotate_rl(nodes, root, handle)
            }
        } else {
            handle
        };

        curr = nodes[top].parent;
    }
}
