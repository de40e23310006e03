//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.
//!
//! Nodes live in an arena owned by the tree and link to each other through handles, including a
//! back-reference to their parent. The parent links let iteration walk the tree without an
//! auxiliary stack and let two trees be merged into a new balanced tree in linear time.

mod balance;
mod compare;
mod iter;
mod merge;
mod node;
mod tree;

pub use self::compare::{Comparator, Natural};
pub use self::iter::{AvlTreeIntoIter, AvlTreeIter};
pub use self::node::NodeRef;
pub use self::tree::AvlTree;

use std::error;
use std::fmt;
use std::result;

/// The failures reported by `AvlTree` operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The value searched for or removed is not in the tree.
    NotFound,
    /// The value inserted is already in the tree.
    AlreadyExists,
    /// Bulk construction encountered a duplicate value.
    InvalidInput,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "Data not found"),
            Error::AlreadyExists => write!(f, "Data already exists"),
            Error::InvalidInput => write!(f, "Invalid input: duplicate value"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
