//! Singly linked list of integer values.
//!
//! Nodes own their successor through a `Box`, so the chain is acyclic by
//! construction and dropping a node releases everything after it. The list
//! keeps a running `size` alongside `head` and no tail pointer.

pub use iter::Iter;
pub use linked::LinkedList;
pub use node::Node;

pub mod iter;
pub mod linked;
pub mod node;
