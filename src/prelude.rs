//! # vartree Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the vartree library. Import this module to get quick access to the essential
//! types for building and serializing value-node trees.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all vartree operations
pub use crate::Error;

/// The result type used throughout vartree
pub use crate::Result;

// ================================================================================================
// The Node Contract
// ================================================================================================

/// The polymorphic base trait every concrete value kind implements
pub use crate::node::ValueNode;

/// Non-overridable convenience wrappers over the canonical channels
pub use crate::node::ValueNodeExt;

/// Kind introspection and tag-byte registry
pub use crate::node::NodeKind;

/// Shared child handle and its access helpers
pub use crate::node::{node_ref, read_node, write_node, NodeRef};

/// Polymorphic construction and restore entry points
pub use crate::node::{new_node, node_from_binary};

// ================================================================================================
// Shipped Value Kinds
// ================================================================================================

/// The concrete kinds shipped with this crate
pub use crate::primitives::{BlobNode, BoolNode, FloatNode, IntNode, ListNode, StrNode};
