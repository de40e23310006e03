use crate::arena::{Arena, Handle};
use crate::avl_tree::compare::{Comparator, Natural};
use crate::avl_tree::iter::{AvlTreeIntoIter, AvlTreeIter, Cursor};
use crate::avl_tree::merge::{self, Source};
use crate::avl_tree::node::{self, Node, NodeRef};
use crate::avl_tree::{balance, Error, Result};
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every node also keeps a link
/// to its parent, which lets iteration proceed without a stack and lets two trees be united in
/// time linear in their sizes.
///
/// Values are ordered by a `Comparator<T>`, which defaults to the `Ord` implementation of `T`.
///
/// # Examples
/// ```
/// use avl_union::avl_tree::{AvlTree, Error};
///
/// let mut tree = AvlTree::new();
/// tree.insert(0).unwrap();
/// tree.insert(3).unwrap();
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.insert(3), Err(Error::AlreadyExists));
///
/// assert_eq!(tree.min(), Some(&0));
/// assert_eq!(tree.search(&3), Ok(&3));
///
/// assert_eq!(tree.remove(&0), Ok(0));
/// assert_eq!(tree.remove(&1), Err(Error::NotFound));
/// ```
pub struct AvlTree<T, C = Natural> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
    min: Option<Handle>,
    max: Option<Handle>,
    len: usize,
    comparator: C,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>` ordered by `T: Ord`.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Constructs a new, empty `AvlTree<T>` with room for `capacity` values before its node
    /// storage reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }

    /// Constructs a tree from a list of values. Fails with `Error::InvalidInput` if the list
    /// contains the same value twice; no partially built tree survives the failure.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::{AvlTree, Error};
    ///
    /// let tree = AvlTree::from_list(vec![101010, 137, 42]).unwrap();
    /// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&42, &137, &101010]);
    ///
    /// assert_eq!(AvlTree::from_list(vec![1, 2, 1]).err(), Some(Error::InvalidInput));
    /// ```
    pub fn from_list<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_list_with_comparator(values, Natural)
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Comparator<T>,
{
    /// Constructs a new, empty `AvlTree<T, C>` ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    /// Constructs a new, empty `AvlTree<T, C>` ordered by `comparator` with room for `capacity`
    /// values.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        AvlTree {
            nodes: Arena::with_capacity(capacity),
            root: None,
            min: None,
            max: None,
            len: 0,
            comparator,
        }
    }

    /// Constructs a tree ordered by `comparator` from a list of values. Fails with
    /// `Error::InvalidInput` on the first duplicate.
    pub fn from_list_with_comparator<I>(values: I, comparator: C) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        let mut tree = Self::with_capacity_and_comparator(lower, comparator);
        for value in values {
            if tree.insert(value).is_err() {
                debug!("duplicate value after {} insertions, dropping partial tree", tree.len);
                return Err(Error::InvalidInput);
            }
        }
        Ok(tree)
    }

    // Descends from the root. Returns the node holding `value`, or the node under which `value`
    // would be attached together with the side to attach it on (`None` for an empty tree).
    fn locate(&self, value: &T) -> Located {
        let mut curr = match self.root {
            Some(root) => root,
            None => return Located::Vacant(None),
        };
        loop {
            let node = &self.nodes[curr];
            let order = self.comparator.compare(value, &node.value);
            let next = match order {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Located::Occupied(curr),
            };
            match next {
                Some(next) => curr = next,
                None => return Located::Vacant(Some((curr, order))),
            }
        }
    }

    /// Inserts a value into the tree. Fails with `Error::AlreadyExists`, leaving the tree
    /// untouched, if an equal value is already present.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::{AvlTree, Error};
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.insert(1), Err(Error::AlreadyExists));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<()> {
        let slot = match self.locate(&value) {
            Located::Occupied(_) => return Err(Error::AlreadyExists),
            Located::Vacant(slot) => slot,
        };

        let parent = slot.map(|(parent, _)| parent);
        let handle = self.nodes.allocate(Node::new(value, parent));
        match slot {
            None => self.root = Some(handle),
            Some((parent, Ordering::Less)) => self.nodes[parent].left = Some(handle),
            Some((parent, _)) => self.nodes[parent].right = Some(handle),
        }

        balance::rebalance(&mut self.nodes, &mut self.root, Some(handle));
        self.len += 1;
        self.refresh_extremes();
        Ok(())
    }

    /// Removes a value from the tree and returns it. Fails with `Error::NotFound`, leaving the
    /// tree untouched, if the value is absent.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::{AvlTree, Error};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(Error::NotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T> {
        let target = match self.locate(value) {
            Located::Occupied(handle) => handle,
            Located::Vacant(_) => return Err(Error::NotFound),
        };

        // A node with two children trades values with its in-order successor, which has no left
        // child, and the successor's node is unlinked instead.
        let doomed = match (self.nodes[target].left, self.nodes[target].right) {
            (Some(_), Some(right)) => {
                let successor = node::leftmost(&self.nodes, right);
                let (target_node, successor_node) = self.nodes.pair_mut(target, successor);
                mem::swap(&mut target_node.value, &mut successor_node.value);
                successor
            },
            _ => target,
        };

        let parent = self.nodes[doomed].parent;
        let child = self.nodes[doomed].left.or(self.nodes[doomed].right);
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
        balance::replace_child(&mut self.nodes, &mut self.root, parent, doomed, child);
        let removed = self.nodes.free(doomed);

        balance::rebalance(&mut self.nodes, &mut self.root, parent);
        self.len -= 1;
        if self.len == 0 {
            self.min = None;
            self.max = None;
        } else {
            self.refresh_extremes();
        }
        Ok(removed.value)
    }

    /// Returns a reference to the stored value equal to `value`, or `Error::NotFound`.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::{AvlTree, Error};
    ///
    /// let tree = AvlTree::from_list(vec![1, 2]).unwrap();
    /// assert_eq!(tree.search(&2), Ok(&2));
    /// assert_eq!(tree.search(&3), Err(Error::NotFound));
    /// ```
    pub fn search(&self, value: &T) -> Result<&T> {
        match self.locate(value) {
            Located::Occupied(handle) => Ok(&self.nodes[handle].value),
            Located::Vacant(_) => Err(Error::NotFound),
        }
    }

    /// Returns a mutable reference to the stored value equal to `value`, or `Error::NotFound`.
    ///
    /// The caller must not change the value in a way that changes how it compares to other
    /// values; doing so breaks the ordering of the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
    /// tree.insert((1, 'a')).unwrap();
    /// tree.search_mut(&(1, ' ')).unwrap().1 = 'b';
    /// assert_eq!(tree.search(&(1, ' ')), Ok(&(1, 'b')));
    /// ```
    pub fn search_mut(&mut self, value: &T) -> Result<&mut T> {
        match self.locate(value) {
            Located::Occupied(handle) => Ok(&mut self.nodes[handle].value),
            Located::Vacant(_) => Err(Error::NotFound),
        }
    }

    /// Checks if a value exists in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// Merges the values of two trees into a new balanced tree, keeping one copy of values present
    /// in both. Both inputs are left intact; every retained value is cloned. Runs in time linear
    /// in `a.len() + b.len()`.
    ///
    /// The result is a nearly-complete binary tree: every level is full except possibly the last.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::AvlTree;
    ///
    /// let a = AvlTree::from_list(300..310).unwrap();
    /// let b = AvlTree::from_list(vec![101010, 137, 42]).unwrap();
    /// let united = AvlTree::union(&a, &b);
    ///
    /// assert_eq!(united.len(), 13);
    /// assert_eq!(united.min(), Some(&42));
    /// assert_eq!(united.max(), Some(&101010));
    /// assert_eq!(AvlTree::union(&a, &a).len(), 10);
    /// ```
    pub fn union(a: &Self, b: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        let sources = merge::merge(a.cursor(), b.cursor(), &a.comparator);
        let mut nodes = Arena::with_capacity(sources.len());
        let handles = sources
            .iter()
            .map(|source| {
                let value = match *source {
                    Source::Left(handle) => &a.nodes[handle].value,
                    Source::Right(handle) => &b.nodes[handle].value,
                };
                nodes.allocate(Node::new(value.clone(), None))
            })
            .collect::<Vec<Handle>>();

        debug!("united {} and {} values into {}", a.len, b.len, handles.len());
        Self::from_sorted_handles(nodes, &handles, a.comparator.clone())
    }

    /// Merges two trees into a new balanced tree, consuming both. No value is cloned: the nodes of
    /// `a` are relinked in place and the retained values of `b` are moved over. Where both trees
    /// hold equal values, the one from `a` is kept.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::AvlTree;
    ///
    /// let a = AvlTree::from_list(vec![String::from("b")]).unwrap();
    /// let b = AvlTree::from_list(vec![String::from("a"), String::from("b")]).unwrap();
    /// let united = AvlTree::union_owned(a, b);
    ///
    /// assert_eq!(united.into_iter().collect::<Vec<String>>(), vec!["a", "b"]);
    /// ```
    pub fn union_owned(mut a: Self, mut b: Self) -> Self {
        let (nodes, handles) = Self::drain_sorted(&mut a, &mut b);
        Self::from_sorted_handles(nodes, &handles, a.comparator)
    }

    /// Moves the values of both trees into a new balanced tree, leaving `a` and `b` empty but
    /// usable. Behaves like `union_owned` otherwise; the result is ordered by a clone of the
    /// comparator of `a`.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::AvlTree;
    ///
    /// let mut a = AvlTree::from_list(vec![2]).unwrap();
    /// let mut b = AvlTree::from_list(vec![1, 2]).unwrap();
    /// let united = AvlTree::union_drain(&mut a, &mut b);
    ///
    /// assert!(a.is_empty() && b.is_empty());
    /// assert_eq!(united.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn union_drain(a: &mut Self, b: &mut Self) -> Self
    where
        C: Clone,
    {
        let (nodes, handles) = Self::drain_sorted(a, b);
        Self::from_sorted_handles(nodes, &handles, a.comparator.clone())
    }

    // Takes the node storage of `a`, moves the retained values of `b` into it and empties both
    // trees. Returns the storage with the handles of the merged values in ascending order.
    fn drain_sorted(a: &mut Self, b: &mut Self) -> (Arena<Node<T>>, Vec<Handle>) {
        let sources = merge::merge(a.cursor(), b.cursor(), &a.comparator);
        debug!("draining {} and {} values into {}", a.len, b.len, sources.len());

        let mut nodes = mem::replace(&mut a.nodes, Arena::new());
        a.reset();
        let handles = sources
            .iter()
            .map(|source| match *source {
                Source::Left(handle) => handle,
                Source::Right(handle) => {
                    let Node { value, .. } = b.nodes.free(handle);
                    nodes.allocate(Node::new(value, None))
                },
            })
            .collect::<Vec<Handle>>();
        b.clear();

        (nodes, handles)
    }
}

impl<T, C> AvlTree<T, C> {
    // `handles` must list every live node of `nodes` in ascending order.
    fn from_sorted_handles(mut nodes: Arena<Node<T>>, handles: &[Handle], comparator: C) -> Self {
        let root = merge::build(&mut nodes, handles, None);
        let mut tree = AvlTree {
            nodes,
            root,
            min: None,
            max: None,
            len: handles.len(),
            comparator,
        };
        tree.refresh_extremes();
        tree
    }

    fn refresh_extremes(&mut self) {
        let nodes = &self.nodes;
        self.min = self.root.map(|root| node::leftmost(nodes, root));
        self.max = self.root.map(|root| node::rightmost(nodes, root));
    }

    fn reset(&mut self) {
        self.root = None;
        self.min = None;
        self.max = None;
        self.len = 0;
    }

    pub(crate) fn cursor(&self) -> Cursor<T> {
        Cursor::new(&self.nodes, self.root, self.len)
    }

    #[cfg(test)]
    pub(crate) fn nodes(&self) -> &Arena<Node<T>> {
        &self.nodes
    }

    #[cfg(test)]
    pub(crate) fn min_handle(&self) -> Option<Handle> {
        self.min
    }

    #[cfg(test)]
    pub(crate) fn max_handle(&self) -> Option<Handle> {
        self.max
    }

    #[cfg(test)]
    pub(crate) fn value_at(&self, handle: Handle) -> &T {
        &self.nodes[handle].value
    }

    /// Returns the number of values in the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree: `-1` when empty, `0` for a single value.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), -1);
    /// for value in 300..310 {
    ///     tree.insert(value).unwrap();
    /// }
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> isize {
        node::height(&self.nodes, self.root)
    }

    /// Clears the tree, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// assert_eq!(tree.min(), None);
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.reset();
    }

    /// Returns the minimum value of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        self.min.map(|handle| &self.nodes[handle].value)
    }

    /// Returns the maximum value of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        self.max.map(|handle| &self.nodes[handle].value)
    }

    /// Returns a read-only view of the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<T>> {
        self.root.map(|root| NodeRef::new(&self.nodes, root))
    }

    /// Returns an iterator over the tree. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use avl_union::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3).unwrap();
    /// tree.insert(1).unwrap();
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter<T> {
        AvlTreeIter::new(self.cursor())
    }
}

enum Located {
    Occupied(Handle),
    Vacant(Option<(Handle, Ordering)>),
}

impl<T, C> Clone for AvlTree<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        AvlTree {
            nodes: self.nodes.clone(),
            root: self.root,
            min: self.min,
            max: self.max,
            len: self.len,
            comparator: self.comparator.clone(),
        }
    }
}

impl<T, C> Default for AvlTree<T, C>
where
    C: Comparator<T> + Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> fmt::Debug for AvlTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> PartialEq for AvlTree<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &AvlTree<T, C>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for AvlTree<T, C> where T: Eq {}

impl<T, C> IntoIterator for AvlTree<T, C> {
    type Item = T;
    type IntoIter = AvlTreeIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        AvlTreeIntoIter::new(self.nodes, self.root)
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = AvlTreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlTree;
    use crate::avl_tree::Error;

    #[test]
    fn test_len_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn test_is_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.insert(1), Ok(()));
        assert!(tree.contains(&1));
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = AvlTree::from_list(vec![2, 1, 3]).unwrap();
        assert_eq!(tree.insert(1), Err(Error::AlreadyExists));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_insert_sequential() {
        let mut tree = AvlTree::new();
        for value in 300..310 {
            tree.insert(value).unwrap();
        }
        assert_eq!(tree.len(), 10);
        assert_eq!(tree.height(), 3);
        assert_eq!(
            tree.iter().cloned().collect::<Vec<u32>>(),
            (300..310).collect::<Vec<u32>>(),
        );
        assert_eq!(tree.min(), Some(&300));
        assert_eq!(tree.max(), Some(&309));
    }

    #[test]
    fn test_remove() {
        let mut tree = AvlTree::new();
        tree.insert(1).unwrap();
        assert_eq!(tree.remove(&1), Ok(1));
        assert!(!tree.contains(&1));
        assert!(tree.is_empty());
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = AvlTree::from_list(vec![5, 3, 8]).unwrap();
        assert_eq!(tree.remove(&4), Err(Error::NotFound));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&3, &5, &8]);
    }

    #[test]
    fn test_remove_two_children() {
        let mut tree = AvlTree::from_list(vec![4, 2, 6, 1, 3, 5, 7]).unwrap();
        assert_eq!(tree.remove(&4), Ok(4));
        assert_eq!(tree.root().map(|root| *root.value()), Some(5));
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &5, &6, &7]);
    }

    #[test]
    fn test_remove_rebalances() {
        let mut tree = AvlTree::from_list(vec![2, 1, 3, 4]).unwrap();
        tree.remove(&1).unwrap();
        assert_eq!(tree.root().map(|root| *root.value()), Some(3));
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.min(), Some(&2));
    }

    #[test]
    fn test_search_missing() {
        let tree = AvlTree::from_list(vec![1]).unwrap();
        assert_eq!(tree.search(&0), Err(Error::NotFound));
    }

    #[test]
    fn test_search_mut() {
        let mut tree = AvlTree::from_list(vec![1, 2]).unwrap();
        assert_eq!(tree.search_mut(&2), Ok(&mut 2));
        assert_eq!(tree.search_mut(&3), Err(Error::NotFound));
    }

    #[test]
    fn test_from_list_duplicate() {
        let tree = AvlTree::from_list(vec![3, 1, 3]);
        assert_eq!(tree.err(), Some(Error::InvalidInput));
    }

    #[test]
    fn test_clear() {
        let mut tree = AvlTree::from_list(0..100).unwrap();
        tree.clear();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.iter().next(), None);
        tree.insert(7).unwrap();
        assert_eq!(tree.min(), Some(&7));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut tree = AvlTree::from_list(vec![1, 2, 3]).unwrap();
        let copy = tree.clone();
        tree.remove(&2).unwrap();
        assert_eq!(copy.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
        assert_eq!(copy.min(), Some(&1));
        assert_eq!(copy.max(), Some(&3));
        assert_ne!(tree, copy);
    }

    #[test]
    fn test_take_leaves_empty_tree() {
        let mut tree = AvlTree::from_list(vec![1, 2, 3]).unwrap();
        let moved: AvlTree<u32> = std::mem::take(&mut tree);
        assert!(tree.is_empty());
        assert_eq!(tree.min(), None);
        assert_eq!(moved.len(), 3);
    }

    #[test]
    fn test_union() {
        let a = AvlTree::from_list(300..310).unwrap();
        let b = AvlTree::from_list(vec![101010, 137, 42]).unwrap();
        let united = AvlTree::union(&a, &b);

        let mut expected = vec![42, 137];
        expected.extend(300..310);
        expected.push(101010);
        assert_eq!(united.iter().cloned().collect::<Vec<u32>>(), expected);
        assert_eq!(united.len(), 13);
        assert_eq!(united.height(), 3);
        assert_eq!(a.len(), 10);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_union_self() {
        let a = AvlTree::from_list(300..310).unwrap();
        let united = AvlTree::union(&a, &a);
        assert_eq!(united, a);
        assert_eq!(united.len(), 10);
    }

    #[test]
    fn test_union_small() {
        let one = AvlTree::from_list(vec![1]).unwrap();
        let two = AvlTree::from_list(vec![2]).unwrap();
        assert_eq!(AvlTree::union(&two, &one).iter().collect::<Vec<&u32>>(), vec![&1, &2]);
        assert_eq!(AvlTree::union(&two, &two).iter().collect::<Vec<&u32>>(), vec![&2]);
    }

    #[test]
    fn test_union_empty() {
        let empty: AvlTree<u32> = AvlTree::new();
        let united = AvlTree::union(&empty, &empty);
        assert!(united.is_empty());
        assert_eq!(united.height(), -1);
        assert_eq!(united.min(), None);
    }

    #[test]
    fn test_union_drain() {
        let mut a = AvlTree::from_list(vec![1, 3, 5]).unwrap();
        let mut b = AvlTree::from_list(vec![2, 3, 4]).unwrap();
        let united = AvlTree::union_drain(&mut a, &mut b);

        assert_eq!(united.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &4, &5]);
        assert_eq!(united.min(), Some(&1));
        assert_eq!(united.max(), Some(&5));
        assert!(a.is_empty() && a.min().is_none() && a.root().is_none());
        assert!(b.is_empty() && b.max().is_none() && b.root().is_none());

        a.insert(10).unwrap();
        b.insert(10).unwrap();
        assert_eq!(AvlTree::union_owned(a, b).len(), 1);
    }

    #[test]
    fn test_union_keeps_left_value() {
        let key = |a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0);
        let mut a = AvlTree::with_comparator(key);
        let mut b = AvlTree::with_comparator(key);
        a.insert((1, 'a')).unwrap();
        b.insert((1, 'b')).unwrap();
        b.insert((2, 'b')).unwrap();

        let united = AvlTree::union(&a, &b);
        assert_eq!(united.iter().collect::<Vec<_>>(), vec![&(1, 'a'), &(2, 'b')]);
    }

    #[test]
    fn test_comparator() {
        let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for value in 0..5 {
            tree.insert(value).unwrap();
        }
        assert_eq!(tree.min(), Some(&4));
        assert_eq!(tree.iter().cloned().collect::<Vec<i32>>(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_debug() {
        let tree = AvlTree::from_list(vec![2, 1]).unwrap();
        assert_eq!(format!("{:?}", tree), "{1, 2}");
    }
}
