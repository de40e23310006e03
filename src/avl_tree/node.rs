use crate::arena::{Arena, Handle};
use std::cmp;

/// A struct representing an internal node of an avl tree.
#[derive(Clone)]
pub struct Node<T> {
    pub value: T,
    pub height: usize,
    pub parent: Option<Handle>,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
}

impl<T> Node<T> {
    pub fn new(value: T, parent: Option<Handle>) -> Self {
        Node {
            value,
            height: 0,
            parent,
            left: None,
            right: None,
        }
    }
}

/// Height of an optional subtree, counting an absent one as `-1`.
pub fn height<T>(nodes: &Arena<Node<T>>, link: Option<Handle>) -> isize {
    match link {
        None => -1,
        Some(handle) => nodes[handle].height as isize,
    }
}

pub fn update<T>(nodes: &mut Arena<Node<T>>, handle: Handle) {
    let node = &nodes[handle];
    let new_height = cmp::max(height(nodes, node.left), height(nodes, node.right)) + 1;
    nodes[handle].height = new_height as usize;
}

pub fn balance_factor<T>(nodes: &Arena<Node<T>>, link: Option<Handle>) -> isize {
    match link {
        None => 0,
        Some(handle) => {
            let node = &nodes[handle];
            height(nodes, node.left) - height(nodes, node.right)
        },
    }
}

pub fn leftmost<T>(nodes: &Arena<Node<T>>, mut handle: Handle) -> Handle {
    while let Some(left) = nodes[handle].left {
        handle = left;
    }
    handle
}

pub fn rightmost<T>(nodes: &Arena<Node<T>>, mut handle: Handle) -> Handle {
    while let Some(right) = nodes[handle].right {
        handle = right;
    }
    handle
}

/// A read-only view of one node of an `AvlTree`, for consumers that inspect the shape of the
/// tree such as printers and validators.
///
/// # Examples
/// ```
/// use avl_union::avl_tree::AvlTree;
///
/// let tree = AvlTree::from_list(vec![2, 1, 3]).unwrap();
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.value(), &2);
/// assert_eq!(root.height(), 1);
/// assert_eq!(root.left().map(|node| *node.value()), Some(1));
/// assert_eq!(root.right().and_then(|node| node.parent()).map(|node| *node.value()), Some(2));
/// ```
pub struct NodeRef<'a, T>
where
    T: 'a,
{
    nodes: &'a Arena<Node<T>>,
    handle: Handle,
}

impl<'a, T> NodeRef<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, handle: Handle) -> Self {
        NodeRef { nodes, handle }
    }

    fn link(&self, link: Option<Handle>) -> Option<NodeRef<'a, T>> {
        link.map(|handle| NodeRef::new(self.nodes, handle))
    }

    /// Returns the value stored in the node.
    pub fn value(&self) -> &'a T {
        &self.nodes[self.handle].value
    }

    /// Returns the cached height of the subtree rooted at the node. A leaf has height `0`.
    pub fn height(&self) -> usize {
        self.nodes[self.handle].height
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.nodes[self.handle].left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.nodes[self.handle].right)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.nodes[self.handle].parent)
    }

    /// Returns `true` if both views refer to the same node of the same tree.
    pub fn ptr_eq(&self, other: &NodeRef<'a, T>) -> bool {
        std::ptr::eq(self.nodes, other.nodes) && self.handle == other.handle
    }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        NodeRef::new(self.nodes, self.handle)
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}
