use std::{any::Any, fmt};

use tracing::debug;

use crate::{
    io::{read_bytes_at, read_le_at, write_le},
    node::{node_from_binary, node_ref, read_node, NodeKind, NodeRef, ValueNode, ValueNodeExt},
    primitives::{ensure_consumed, expect_tag},
    Result,
};

/// An ordered container of heterogeneous child nodes.
///
/// Children are held through shared [`NodeRef`] handles, which is what gives the two
/// copy operations their distinct meanings: [`ValueNode::clone_node`] copies the
/// handles (the clone and the original observe the same children), while
/// [`ValueNode::deep_clone`] re-wraps deep copies into fresh handles, producing a fully
/// independent hierarchy.
///
/// The binary form is self-describing - each child is stored length-prefixed with its
/// own tag-leading encoding - so restoring goes through
/// [`node_from_binary`] without the container knowing its children's kinds up front.
/// Display text is a read-only `[child, child, ...]` rendering; `set_text` rejects all
/// input.
///
/// # Examples
///
/// ```rust
/// use vartree::prelude::*;
///
/// let mut list = ListNode::new();
/// list.push_node(Box::new(IntNode::new(1)));
/// list.push_node(Box::new(StrNode::new("two")));
///
/// assert_eq!(list.text(), "[1, two]");
///
/// let restored = vartree::node_from_binary(&list.to_binary())?;
/// assert_eq!(restored.text(), list.text());
/// # Ok::<(), vartree::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct ListNode {
    children: Vec<NodeRef>,
}

impl ListNode {
    /// Creates an empty list node.
    #[must_use]
    pub fn new() -> Self {
        ListNode::default()
    }

    /// Appends a shared child handle.
    pub fn push(&mut self, child: NodeRef) {
        self.children.push(child);
        self.changed();
    }

    /// Wraps an owned node into a shared handle, appends it and returns the handle.
    pub fn push_node(&mut self, node: Box<dyn ValueNode>) -> NodeRef {
        let child = node_ref(node);
        self.push(child.clone());
        child
    }

    /// The child handles, in order.
    #[must_use]
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// A cloned handle to the child at `index`, if present.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<NodeRef> {
        self.children.get(index).cloned()
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the list has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Drops all children (the handles; shared owners keep theirs alive).
    pub fn clear(&mut self) {
        self.children.clear();
        self.changed();
    }

    fn decode(data: &[u8]) -> Result<Vec<NodeRef>> {
        let mut offset = 0;
        expect_tag(data, &mut offset, NodeKind::List)?;

        let count: u64 = read_le_at(data, &mut offset)?;
        let mut children = Vec::new();
        for _ in 0..count {
            let len: u64 = read_le_at(data, &mut offset)?;
            let Ok(len) = usize::try_from(len) else {
                return Err(malformed_error!("Child length {} exceeds address space", len));
            };

            let encoded = read_bytes_at(data, &mut offset, len)?;
            children.push(node_ref(node_from_binary(encoded)?));
        }

        ensure_consumed(data, offset, NodeKind::List)?;
        Ok(children)
    }
}

impl fmt::Debug for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListNode")
            .field("children", &self.children.len())
            .finish()
    }
}

impl ValueNode for ListNode {
    fn kind(&self) -> NodeKind {
        NodeKind::List
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_node(&self) -> Box<dyn ValueNode> {
        // Handle copies only - the shallow contract.
        Box::new(self.clone())
    }

    fn deep_clone(&self) -> Box<dyn ValueNode> {
        let children = self
            .children
            .iter()
            .map(|child| node_ref(read_node(child).deep_clone()))
            .collect();
        Box::new(ListNode { children })
    }

    fn print_debug(&self) {
        debug!(kind = %self.kind(), children = self.children.len(), "value node");
        for child in &self.children {
            read_node(child).print_debug();
        }
    }

    fn text(&self) -> String {
        let mut out = String::from("[");
        for (index, child) in self.children.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            out.push_str(&read_node(child).text());
        }
        out.push(']');
        out
    }

    fn set_text(&mut self, _val: &str) -> bool {
        // The display rendering drops child kind information; there is nothing
        // lossless to parse back.
        false
    }

    fn write_binary(&self, out: &mut Vec<u8>) {
        write_le(out, NodeKind::List.tag());
        write_le(out, self.children.len() as u64);

        for child in &self.children {
            let encoded = read_node(child).to_binary();
            write_le(out, encoded.len() as u64);
            out.extend_from_slice(&encoded);
        }
    }

    fn set_binary(&mut self, data: &[u8]) -> bool {
        match Self::decode(data) {
            Ok(children) => {
                self.children = children;
                self.changed();
                true
            }
            Err(_) => false,
        }
    }
}
