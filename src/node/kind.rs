use strum::{Display, EnumCount, EnumIter};

use crate::{
    node::ValueNode,
    primitives::{BlobNode, BoolNode, FloatNode, IntNode, ListNode, StrNode},
    Error, Result,
};

/// Identifiers for the node kinds shipped with this crate.
///
/// Each variant's discriminant is the kind's tag byte - the first byte of every
/// canonical binary form, which is what makes those forms self-describing and lets
/// container kinds restore heterogeneous children through [`node_from_binary`].
/// Tag values are part of the persistence format and must never be reassigned.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumCount, EnumIter)]
#[repr(u8)]
pub enum NodeKind {
    /// `BoolNode` (0x01) - A true/false flag.
    Bool = 0x01,

    /// `IntNode` (0x02) - A 64-bit signed integer with optional range bounds.
    Int = 0x02,

    /// `FloatNode` (0x03) - A finite `f64` with optional range bounds.
    Float = 0x03,

    /// `StrNode` (0x04) - A UTF-8 string.
    Str = 0x04,

    /// `BlobNode` (0x05) - An opaque byte payload with a contents-stream channel.
    Blob = 0x05,

    /// `ListNode` (0x06) - An ordered container of shared child nodes.
    List = 0x06,
}

impl NodeKind {
    /// Resolves a tag byte back to its kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if the byte maps to no registered kind.
    pub fn from_byte(value: u8) -> Result<NodeKind> {
        match value {
            0x01 => Ok(NodeKind::Bool),
            0x02 => Ok(NodeKind::Int),
            0x03 => Ok(NodeKind::Float),
            0x04 => Ok(NodeKind::Str),
            0x05 => Ok(NodeKind::Blob),
            0x06 => Ok(NodeKind::List),
            _ => Err(Error::UnknownKind(value)),
        }
    }

    /// The tag byte this kind writes at the head of its canonical binary form.
    #[must_use]
    pub fn tag(self) -> u8 {
        self as u8
    }
}

/// Constructs a default-valued node of the given kind.
///
/// The companion of [`node_from_binary`] for callers (tree builders, editors) that
/// create nodes first and populate them through the canonical channels afterwards.
#[must_use]
pub fn new_node(kind: NodeKind) -> Box<dyn ValueNode> {
    match kind {
        NodeKind::Bool => Box::new(BoolNode::default()),
        NodeKind::Int => Box::new(IntNode::default()),
        NodeKind::Float => Box::new(FloatNode::default()),
        NodeKind::Str => Box::new(StrNode::default()),
        NodeKind::Blob => Box::new(BlobNode::default()),
        NodeKind::List => Box::new(ListNode::default()),
    }
}

/// Restores a node polymorphically from a canonical binary form.
///
/// Reads the leading tag byte, constructs the matching kind and hands the full form to
/// its [`ValueNode::set_binary`]. This is the restore path container kinds use for
/// their children, and the entry point for a persistence layer that does not know the
/// kind ahead of time.
///
/// # Errors
///
/// Returns [`Error::Empty`] for empty input, [`Error::UnknownKind`] for an
/// unregistered tag, or [`Error::Malformed`] if the named kind rejects the form.
///
/// # Examples
///
/// ```rust
/// use vartree::{node_from_binary, prelude::*};
///
/// let encoded = IntNode::new(-3).to_binary();
/// let restored = node_from_binary(&encoded)?;
/// assert_eq!(restored.kind(), NodeKind::Int);
/// assert_eq!(restored.text(), "-3");
/// # Ok::<(), vartree::Error>(())
/// ```
pub fn node_from_binary(data: &[u8]) -> Result<Box<dyn ValueNode>> {
    let Some(&tag) = data.first() else {
        return Err(Error::Empty);
    };

    let mut node = new_node(NodeKind::from_byte(tag)?);
    if node.set_binary(data) {
        Ok(node)
    } else {
        Err(malformed_error!(
            "{} node rejected a binary form of {} bytes",
            node.kind(),
            data.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::node::ValueNodeExt;

    use super::*;

    #[test]
    fn tags_roundtrip_for_every_kind() {
        for kind in NodeKind::iter() {
            assert_eq!(NodeKind::from_byte(kind.tag()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(matches!(
            NodeKind::from_byte(0x00),
            Err(Error::UnknownKind(0x00))
        ));
        assert!(matches!(
            NodeKind::from_byte(0xFF),
            Err(Error::UnknownKind(0xFF))
        ));
    }

    #[test]
    fn new_node_constructs_matching_kind() {
        for kind in NodeKind::iter() {
            assert_eq!(new_node(kind).kind(), kind);
        }
    }

    #[test]
    fn factory_restores_every_default_kind() {
        for kind in NodeKind::iter() {
            let encoded = new_node(kind).to_binary();
            let restored = node_from_binary(&encoded).unwrap();
            assert_eq!(restored.kind(), kind);
            assert_eq!(restored.to_binary(), encoded);
        }
    }

    #[test]
    fn factory_rejects_empty_and_foreign_input() {
        assert!(matches!(node_from_binary(&[]), Err(Error::Empty)));
        assert!(node_from_binary(&[0xEE, 0x01]).is_err());
        // Valid tag, truncated body.
        assert!(node_from_binary(&[NodeKind::Int.tag()]).is_err());
    }
}
