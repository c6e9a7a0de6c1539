//! The value-node base contract.
//!
//! Everything a configuration/inspection tree needs from one value-bearing entity lives
//! behind the [`crate::node::ValueNode`] trait: cloning (shallow and deep), a human-editable
//! display text, the canonical binary and serial channels, the optional contents stream, and
//! the numeric capability probes. The trait carries safe defaults for every optional
//! capability so that a minimal kind only implements the handful of operations its payload
//! actually needs.
//!
//! # Key Components
//!
//! - [`crate::node::ValueNode`] - The polymorphic base trait every concrete kind implements
//! - [`crate::node::ValueNodeExt`] - Sealed, non-overridable convenience wrappers
//! - [`crate::node::NodeRef`] - Shared handle for container children
//! - [`crate::node::NodeKind`] - Kind introspection and tag-byte registry
//! - [`crate::node::node_from_binary`] - Polymorphic restore from a canonical binary form

mod kind;
mod value;

pub use kind::{new_node, node_from_binary, NodeKind};
pub use value::{node_ref, read_node, write_node, NodeRef, ValueNode, ValueNodeExt};
