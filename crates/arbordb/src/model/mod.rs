//! Runtime data model definitions.
//!
//! Types in `model` are the runtime representation of declared entities:
//! which fields exist, which storage column each one reads from, and what
//! kind of value it holds. Query validation and the tree-path locator
//! introspect these descriptors; nothing here touches storage.
pub mod entity;
pub mod field;
