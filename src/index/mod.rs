//! Ordered index structures: balanced multiway search trees supporting
//! sorted insertion. Deletion is out of scope.

pub mod bplus;
pub mod btree;

pub use bplus::BPlusTree;
pub use btree::BTree;
