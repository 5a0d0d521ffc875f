//! Query-time database layer: predicates, lazy row-sets, the in-memory
//! store they read from, and the tree extension built on top.

pub mod predicate;
pub mod query;
pub mod store;
pub mod tree;
