// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # vartree
//!
//! A typed, serializable value-node framework for configuration and inspection trees.
//! `vartree` defines one polymorphic base contract - the [`ValueNode`] trait - that every
//! concrete value kind (flags, numbers, strings, blobs, containers, ...) implements, giving
//! heterogeneous nodes a single uniform surface for cloning, display, capability probing
//! and lossless serialization.
//!
//! ## Features
//!
//! - **One contract, many kinds** - editors, plotters and persistence layers hold any node
//!   through [`ValueNode`] without knowing its concrete type
//! - **Two canonical channels** - a compact, total, tag-prefixed binary form and an
//!   XML-embeddable serial text form, both exactly round-trippable per kind
//! - **Out-of-band contents** - a secondary stream channel keeps large payloads (blobs,
//!   images) out of inline text, tagged with a filename-extension hint
//! - **Shallow/deep copy duality** - container kinds share children by handle on
//!   [`ValueNode::clone_node`] and duplicate the whole hierarchy on
//!   [`ValueNode::deep_clone`]
//! - **Capability probes** - `has_value`/`has_min_value`/`has_max_value` let plotting code
//!   interrogate nodes without downcasts
//! - **No-panic failure policy** - rejected input reports `false` and leaves the node's
//!   prior state intact; internal decoders surface [`Error`] with source context
//!
//! ## Quick Start
//!
//! Add `vartree` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! vartree = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use vartree::prelude::*;
//!
//! let mut root = ListNode::new();
//! root.push_node(Box::new(IntNode::bounded(7, 0, 100)));
//! root.push_node(Box::new(StrNode::new("sensor-a")));
//!
//! // The canonical binary form is total and self-describing.
//! let saved = root.to_binary();
//! let restored = vartree::node_from_binary(&saved)?;
//! assert_eq!(restored.text(), "[7, sensor-a]");
//! # Ok::<(), vartree::Error>(())
//! ```
//!
//! ### Probing Capabilities
//!
//! ```rust
//! use vartree::prelude::*;
//!
//! fn plot_range(node: &dyn ValueNode) -> Option<(f64, f64)> {
//!     if node.has_min_value() && node.has_max_value() {
//!         Some((node.min_value(), node.max_value()))
//!     } else {
//!         None
//!     }
//! }
//!
//! assert_eq!(plot_range(&IntNode::bounded(5, 0, 10)), Some((0.0, 10.0)));
//! assert_eq!(plot_range(&StrNode::new("text")), None);
//! ```
//!
//! ## Architecture
//!
//! `vartree` is organized into a small set of modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`node`] - The [`ValueNode`] contract, kind registry and shared-child handles
//! - [`primitives`] - The shipped concrete kinds
//! - [`io`] - Bounds-checked little-endian field I/O and the hex serial codec
//! - [`Error`] and [`Result`] - Error handling for the decoding and stream paths
//!
//! ### Serialization Model
//!
//! Every kind owns three representations with distinct guarantees:
//!
//! - **Binary** ([`ValueNode::write_binary`] / [`ValueNode::set_binary`]) - the ground
//!   truth: total, tag-prefixed, little-endian, exact round-trip within the same kind
//! - **Serial** ([`ValueNode::write_serial`] / [`ValueNode::set_serial`]) - what a
//!   persistence layer embeds in documents; derived from the binary form as hex unless a
//!   kind overrides with a friendlier lossless text encoding
//! - **Display** ([`ValueNode::text`] / [`ValueNode::set_text`]) - the editable,
//!   possibly lossy form a UI shows; round-trip is not guaranteed
//!
//! The convenience wrappers [`ValueNodeExt::to_binary`] and [`ValueNodeExt::to_serial`]
//! are sealed so each channel keeps exactly one behavioral override point.
//!
//! ## Diagnostics
//!
//! [`ValueNode::print_debug`] emits node state through [`tracing`] at debug level; wire up
//! any `tracing` subscriber to observe it. The output is for human consumption only.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the vartree library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use vartree::prelude::*;
///
/// let node = FloatNode::bounded(0.5, 0.0, 1.0);
/// assert!(node.has_value());
/// ```
pub mod prelude;

/// The value-node base contract and its supporting types.
///
/// This module defines everything a tree, editor or persistence layer needs from one
/// value-bearing node:
///
/// - [`node::ValueNode`] - The polymorphic base trait (cloning, display text, canonical
///   binary/serial channels, contents stream, numeric facet)
/// - [`node::ValueNodeExt`] - Sealed convenience wrappers returning owned buffers
/// - [`node::NodeKind`] - Kind introspection and the persistent tag-byte registry
/// - [`node::NodeRef`] - Shared child handle used by container kinds
/// - [`node::new_node`] / [`node::node_from_binary`] - Polymorphic construction and restore
pub mod node;

/// The concrete value kinds shipped with this crate.
///
/// Six kinds cover the common payloads of a configuration/inspection tree: flags,
/// integers and floats (with optional clamping bounds), strings, opaque blobs with an
/// out-of-band contents payload, and ordered containers of shared children. Each kind's
/// module documents its canonical layout decisions.
pub mod primitives;

/// Bounds-checked little-endian field I/O and the hex serial codec.
///
/// The building blocks every shipped kind encodes and decodes its canonical binary form
/// with. Exposed so external kinds can follow the same layout discipline.
pub mod io;

pub use error::Error;

/// `vartree` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Example
///
/// ```rust
/// use vartree::{node_from_binary, Result, ValueNode};
///
/// fn restore(data: &[u8]) -> Result<String> {
///     Ok(node_from_binary(data)?.text())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

pub use node::{new_node, node_from_binary, NodeKind, NodeRef, ValueNode, ValueNodeExt};
