use crate::arena::{Arena, Handle};
use crate::avl_tree::balance;
use crate::avl_tree::node::{self, Node};

/// Returns the in-order successor of `handle` by following parent links.
pub fn successor<T>(nodes: &Arena<Node<T>>, handle: Handle) -> Option<Handle> {
    if let Some(right) = nodes[handle].right {
        return Some(node::leftmost(nodes, right));
    }
    let mut curr = handle;
    let mut parent = nodes[curr].parent;
    while let Some(p) = parent {
        if nodes[p].right != Some(curr) {
            break;
        }
        curr = p;
        parent = nodes[p].parent;
    }
    parent
}

/// Returns the in-order predecessor of `handle` by following parent links.
pub fn predecessor<T>(nodes: &Arena<Node<T>>, handle: Handle) -> Option<Handle> {
    if let Some(left) = nodes[handle].left {
        return Some(node::rightmost(nodes, left));
    }
    let mut curr = handle;
    let mut parent = nodes[curr].parent;
    while let Some(p) = parent {
        if nodes[p].left != Some(curr) {
            break;
        }
        curr = p;
        parent = nodes[p].parent;
    }
    parent
}

/// Cursor pair shared by the borrowing iterators. Holds no state besides the next handle at each
/// end and the number of values left between them.
pub struct Cursor<'a, T>
where
    T: 'a,
{
    nodes: &'a Arena<Node<T>>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Cursor<'a, T>
where
    T: 'a,
{
    pub fn new(nodes: &'a Arena<Node<T>>, root: Option<Handle>, len: usize) -> Self {
        Cursor {
            nodes,
            front: root.map(|root| node::leftmost(nodes, root)),
            back: root.map(|root| node::rightmost(nodes, root)),
            remaining: len,
        }
    }

    pub fn next_handle(&mut self) -> Option<(Handle, &'a T)> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.front = successor(self.nodes, handle);
        self.remaining -= 1;
        Some((handle, &self.nodes[handle].value))
    }

    pub fn next_back_handle(&mut self) -> Option<(Handle, &'a T)> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.back = predecessor(self.nodes, handle);
        self.remaining -= 1;
        Some((handle, &self.nodes[handle].value))
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Cursor {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T>
where
    T: 'a,
{
    type Item = (Handle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_handle()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// An iterator for `AvlTree<T, C>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
/// It walks parent links and keeps no stack.
pub struct AvlTreeIter<'a, T>
where
    T: 'a,
{
    cursor: Cursor<'a, T>,
}

impl<'a, T> AvlTreeIter<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(cursor: Cursor<'a, T>) -> Self {
        AvlTreeIter { cursor }
    }
}

impl<'a, T> Clone for AvlTreeIter<'a, T> {
    fn clone(&self) -> Self {
        AvlTreeIter {
            cursor: self.cursor.clone(),
        }
    }
}

impl<'a, T> Iterator for AvlTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_handle().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for AvlTreeIter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cursor.next_back_handle().map(|(_, value)| value)
    }
}

impl<'a, T> ExactSizeIterator for AvlTreeIter<'a, T> where T: 'a {}

/// An owning iterator for `AvlTree<T, C>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned values. Each step
/// unlinks the current minimum (or maximum) node, so the nodes not yet yielded always form a
/// valid binary search tree.
pub struct AvlTreeIntoIter<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<T> AvlTreeIntoIter<T> {
    pub(crate) fn new(nodes: Arena<Node<T>>, root: Option<Handle>) -> Self {
        AvlTreeIntoIter {
            front: root.map(|root| node::leftmost(&nodes, root)),
            back: root.map(|root| node::rightmost(&nodes, root)),
            remaining: nodes.len(),
            nodes,
            root,
        }
    }
}

impl<T> Iterator for AvlTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let min = self.front?;
        let parent = self.nodes[min].parent;
        let right = self.nodes[min].right;
        if let Some(right) = right {
            self.nodes[right].parent = parent;
        }
        balance::replace_child(&mut self.nodes, &mut self.root, parent, min, right);

        self.front = match right {
            Some(right) => Some(node::leftmost(&self.nodes, right)),
            None => parent,
        };
        self.remaining -= 1;
        Some(self.nodes.free(min).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for AvlTreeIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let max = self.back?;
        let parent = self.nodes[max].parent;
        let left = self.nodes[max].left;
        if let Some(left) = left {
            self.nodes[left].parent = parent;
        }
        balance::replace_child(&mut self.nodes, &mut self.root, parent, max, left);

        self.back = match left {
            Some(left) => Some(node::rightmost(&self.nodes, left)),
            None => parent,
        };
        self.remaining -= 1;
        Some(self.nodes.free(max).value)
    }
}

impl<T> ExactSizeIterator for AvlTreeIntoIter<T> {}
