use std::{
    any::Any,
    io::{Read, Write},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::debug;

use crate::{
    io::{decode_hex, encode_hex},
    node::NodeKind,
    Result,
};

/// Shared handle to a child node held by a container kind.
///
/// Container kinds never own their children exclusively once a shallow clone exists:
/// [`ValueNode::clone_node`] copies these handles, so the original and the clone observe
/// the same child objects, while [`ValueNode::deep_clone`] re-wraps fresh copies. The
/// `RwLock` serializes access to a child for the duration of a single method call, which
/// is the full extent of the locking discipline this layer defines.
pub type NodeRef = Arc<RwLock<Box<dyn ValueNode>>>;

/// Wraps an owned node into a [`NodeRef`] shared handle.
#[must_use]
pub fn node_ref(node: Box<dyn ValueNode>) -> NodeRef {
    Arc::new(RwLock::new(node))
}

/// Acquires read access to a shared child node.
///
/// A poisoned lock is absorbed rather than propagated; a panic in another holder never
/// renders a child unreachable.
pub fn read_node(node: &NodeRef) -> RwLockReadGuard<'_, Box<dyn ValueNode>> {
    node.read().unwrap_or_else(PoisonError::into_inner)
}

/// Acquires write access to a shared child node.
///
/// Poisoning is absorbed the same way as in [`read_node`].
pub fn write_node(node: &NodeRef) -> RwLockWriteGuard<'_, Box<dyn ValueNode>> {
    node.write().unwrap_or_else(PoisonError::into_inner)
}

/// The polymorphic base contract for one typed, value-bearing node.
///
/// A caller - typically a tree/container component or a persistence layer - holds a node
/// through this trait and invokes cloning, display, serialization or capability probes
/// without knowing the concrete kind; the concrete kind supplies the actual bytes and
/// state. The base contract owns no data of its own.
///
/// # Contract
///
/// Each concrete kind must keep its display text, canonical binary form and serial form
/// mutually consistent: a clone followed by a round-trip through any canonical channel
/// produces an equal logical value. The canonical binary form is total (it encodes the
/// full node state), leads with the kind's [`NodeKind`] tag byte, and round-trips exactly
/// within the same kind.
///
/// # Failure Policy
///
/// Operations that can reject input (`set_text`, `set_serial`, `set_binary`,
/// `read_contents`) report failure through their boolean return and leave the node's
/// prior state fully intact. Nothing at this layer panics or unwinds across the trait
/// surface; capability accessors called without their capability return harmless
/// defaults.
///
/// # Minimal Implementations
///
/// A leaf kind without bounds, contents payload or numeric value only implements
/// [`kind`](Self::kind), [`as_any`](Self::as_any), [`as_any_mut`](Self::as_any_mut),
/// [`clone_node`](Self::clone_node), [`text`](Self::text), [`set_text`](Self::set_text),
/// [`write_binary`](Self::write_binary) and [`set_binary`](Self::set_binary); every
/// other operation has a safe provided default.
///
/// # Examples
///
/// ```rust
/// use vartree::prelude::*;
///
/// let mut node = IntNode::new(42);
/// let snapshot = node.to_binary();
///
/// node.set_text("17");
/// assert_eq!(node.text(), "17");
///
/// assert!(node.set_binary(&snapshot));
/// assert_eq!(node.value(), 42.0);
/// ```
pub trait ValueNode: Send + Sync {
    /// Scoped-acquisition hook for kinds that guard an interior-mutable payload.
    ///
    /// The base contract is not thread-safe by itself; a kind that allows shared
    /// mutation may pair `lock`/[`unlock`](Self::unlock) around its payload access.
    /// The shipped kinds mutate through `&mut self` and leave these as no-ops.
    fn lock(&self) {}

    /// Releases what [`lock`](Self::lock) acquired. No-op by default.
    fn unlock(&self) {}

    /// Mutation-notification hook.
    ///
    /// Concrete kinds invoke this after their payload mutates so observers layered
    /// above (e.g. an editor widget) can react; the base wires no observers and the
    /// default does nothing.
    fn changed(&self) {}

    /// The kind of this node, for introspection and tag dispatch.
    fn kind(&self) -> NodeKind;

    /// Upcasts to [`Any`] for concrete-type recovery.
    fn as_any(&self) -> &dyn Any;

    /// Mutable variant of [`as_any`](Self::as_any).
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Creates a clone of this node.
    ///
    /// The clone is a new, independently owned node of the same kind with the same
    /// immediate state. For container kinds holding [`NodeRef`] children this is a
    /// SHALLOW copy: the handles are copied, not the children behind them. For a fully
    /// recursive copy of the hierarchy use [`deep_clone`](Self::deep_clone).
    fn clone_node(&self) -> Box<dyn ValueNode>;

    /// Creates a deep clone of this node.
    ///
    /// Like [`clone_node`](Self::clone_node), except container kinds recursively
    /// duplicate the entire child hierarchy, producing a tree with no aliasing back to
    /// the source. The default delegates to `clone_node`, which is correct for every
    /// leaf kind; container kinds must override to recurse.
    fn deep_clone(&self) -> Box<dyn ValueNode> {
        self.clone_node()
    }

    /// Emits this node's state to the diagnostic sink.
    ///
    /// Output goes through [`tracing`] at debug level, is meant for human consumption
    /// only, and never fails.
    fn print_debug(&self) {
        debug!(kind = %self.kind(), value = %self.text(), "value node");
    }

    /// The human-readable, editable display text of this node's value.
    ///
    /// Independent of the canonical serial form; round-tripping through
    /// [`set_text`](Self::set_text) is not guaranteed to be lossless.
    fn text(&self) -> String;

    /// Sets this node's value from display text.
    ///
    /// Returns `false` if the text cannot be interpreted by this kind, in which case
    /// the node's prior state is preserved.
    fn set_text(&mut self, val: &str) -> bool;

    /// Appends this node's full canonical binary form to `out`.
    ///
    /// The encoding leads with this kind's tag byte and is the exact, total
    /// representation of the node's state - no truncation. This is the single override
    /// point of the binary channel; the returning convenience wrapper is
    /// [`ValueNodeExt::to_binary`] and cannot be overridden.
    fn write_binary(&self, out: &mut Vec<u8>);

    /// Restores this node's state from a canonical binary form.
    ///
    /// Accepts exactly what [`write_binary`](Self::write_binary) of the same kind
    /// produces. Foreign or corrupted input returns `false` and leaves the node's
    /// prior state intact.
    fn set_binary(&mut self, data: &[u8]) -> bool;

    /// Appends this node's canonical serial text to `out`.
    ///
    /// The serial channel is what a persistence layer embeds in text documents. The
    /// default derives it from the binary form as ASCII hex, which is always
    /// XML-embeddable; kinds may override with a friendlier lossless text encoding,
    /// overriding [`set_serial`](Self::set_serial) symmetrically. The returning
    /// convenience wrapper is [`ValueNodeExt::to_serial`] and cannot be overridden.
    fn write_serial(&self, out: &mut String) {
        let mut buf = Vec::new();
        self.write_binary(&mut buf);
        out.push_str(&encode_hex(&buf));
    }

    /// Restores this node's state from canonical serial text.
    ///
    /// Mirrors [`set_binary`](Self::set_binary)'s contract on the text channel: `false`
    /// on rejected input, prior state preserved. The default decodes the hex derivation
    /// produced by the default [`write_serial`](Self::write_serial).
    fn set_serial(&mut self, text: &str) -> bool {
        match decode_hex(text) {
            Ok(bytes) => self.set_binary(&bytes),
            Err(_) => false,
        }
    }

    /// Writes this node's secondary contents payload to a caller-supplied stream.
    ///
    /// Most kinds carry no secondary payload and inherit this no-op. Kinds with large
    /// or binary payloads (e.g. blobs) stream them here so the persistence layer can
    /// keep them out of inline serial text, in a side-file named with
    /// [`contents_extension`](Self::contents_extension).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the caller's stream fails; the node itself
    /// cannot fail.
    fn write_contents(&self, _stream: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    /// Reads this node's secondary contents payload back from a stream.
    ///
    /// `extension` is the filename-extension hint describing how the side-file was
    /// encoded. Returns `true` if contents were consumed; the default consumes nothing
    /// and reports `false`. A failing stream is treated like any other rejected input:
    /// `false`, prior state preserved.
    fn read_contents(&mut self, _stream: &mut dyn Read, _extension: &str) -> bool {
        false
    }

    /// Suggested filename extension for the serialized contents payload.
    ///
    /// A persistence layer uses this to name the side-file it writes
    /// [`write_contents`](Self::write_contents) output into.
    fn contents_extension(&self) -> &str {
        ".bin"
    }

    /// Whether this node carries a numeric value.
    ///
    /// Callers such as a plotting component probe this instead of inspecting concrete
    /// types. `false` by default.
    fn has_value(&self) -> bool {
        false
    }

    /// Whether this node's value range has a pre-specified minimum. `false` by default.
    fn has_min_value(&self) -> bool {
        false
    }

    /// Whether this node's value range has a pre-specified maximum. `false` by default.
    fn has_max_value(&self) -> bool {
        false
    }

    /// This node's numeric value.
    ///
    /// Check [`has_value`](Self::has_value) first; without the capability this returns
    /// a stable, harmless `0.0` and never panics.
    fn value(&self) -> f64 {
        0.0
    }

    /// The pre-specified minimum of this node's value range.
    ///
    /// Check [`has_min_value`](Self::has_min_value) first; `0.0` without the capability.
    fn min_value(&self) -> f64 {
        0.0
    }

    /// The pre-specified maximum of this node's value range.
    ///
    /// Check [`has_max_value`](Self::has_max_value) first; `0.0` without the capability.
    fn max_value(&self) -> f64 {
        0.0
    }
}

mod sealed {
    pub trait Sealed {}

    impl<T: super::ValueNode + ?Sized> Sealed for T {}
}

/// Non-overridable convenience wrappers over the canonical channels.
///
/// Sealed and blanket-implemented for every [`ValueNode`], so each serialization
/// channel has exactly one behavioral override point: the buffer-writing method on the
/// trait itself. Implementing this trait outside the crate is impossible.
pub trait ValueNodeExt: sealed::Sealed {
    /// Returns the full canonical binary form of this node.
    ///
    /// Wraps [`ValueNode::write_binary`] into a returned buffer.
    fn to_binary(&self) -> Vec<u8>;

    /// Returns the canonical serial text of this node.
    ///
    /// Wraps [`ValueNode::write_serial`] into a returned string.
    fn to_serial(&self) -> String;
}

impl<T: ValueNode + ?Sized> ValueNodeExt for T {
    fn to_binary(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_binary(&mut out);
        out
    }

    fn to_serial(&self) -> String {
        let mut out = String::new();
        self.write_serial(&mut out);
        out
    }
}
