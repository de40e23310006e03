//! An ordered set backed by an avl tree whose nodes keep parent links, with a union operation
//! that merges two sets into a new balanced tree in linear time.

pub mod arena;
pub mod avl_tree;
