use std::cmp::Ordering;

/// A total order over `T`, fixed for the lifetime of a tree.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator, which makes one-off orders cheap to
/// declare:
///
/// ```
/// use avl_union::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// tree.insert(1).unwrap();
/// tree.insert(3).unwrap();
/// tree.insert(2).unwrap();
/// assert_eq!(tree.iter().collect::<Vec<&i32>>(), vec![&3, &2, &1]);
/// ```
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The comparator induced by `T: Ord`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
