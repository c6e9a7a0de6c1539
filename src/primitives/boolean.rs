use std::any::Any;

use crate::{
    io::{read_le_at, write_le},
    node::{NodeKind, ValueNode},
    primitives::{ensure_consumed, expect_tag},
    Result,
};

/// A true/false flag node.
///
/// Display and serial text are `"true"`/`"false"`; `"1"`/`"0"` are accepted on input.
/// The numeric facet reports the flag as `0.0`/`1.0` with a fixed `[0, 1]` range, which
/// makes flags plottable next to genuinely numeric nodes.
///
/// # Examples
///
/// ```rust
/// use vartree::prelude::*;
///
/// let mut node = BoolNode::new(true);
/// assert_eq!(node.to_serial(), "true");
/// assert_eq!(node.value(), 1.0);
///
/// assert!(node.set_text("0"));
/// assert!(!node.get());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoolNode {
    value: bool,
}

impl BoolNode {
    /// Creates a flag node with the given value.
    #[must_use]
    pub fn new(value: bool) -> Self {
        BoolNode { value }
    }

    /// The current flag value.
    #[must_use]
    pub fn get(&self) -> bool {
        self.value
    }

    /// Sets the flag value.
    pub fn set(&mut self, value: bool) {
        self.value = value;
        self.changed();
    }

    fn decode(data: &[u8]) -> Result<bool> {
        let mut offset = 0;
        expect_tag(data, &mut offset, NodeKind::Bool)?;

        let raw: u8 = read_le_at(data, &mut offset)?;
        let value = match raw {
            0 => false,
            1 => true,
            other => return Err(malformed_error!("Invalid flag byte - {:#04x}", other)),
        };

        ensure_consumed(data, offset, NodeKind::Bool)?;
        Ok(value)
    }

    fn parse_text(val: &str) -> Option<bool> {
        let val = val.trim();
        if val.eq_ignore_ascii_case("true") || val == "1" {
            Some(true)
        } else if val.eq_ignore_ascii_case("false") || val == "0" {
            Some(false)
        } else {
            None
        }
    }
}

impl ValueNode for BoolNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Bool
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_node(&self) -> Box<dyn ValueNode> {
        Box::new(self.clone())
    }

    fn text(&self) -> String {
        if self.value { "true" } else { "false" }.to_string()
    }

    fn set_text(&mut self, val: &str) -> bool {
        match Self::parse_text(val) {
            Some(parsed) => {
                self.value = parsed;
                self.changed();
                true
            }
            None => false,
        }
    }

    fn write_binary(&self, out: &mut Vec<u8>) {
        write_le(out, NodeKind::Bool.tag());
        write_le(out, u8::from(self.value));
    }

    fn set_binary(&mut self, data: &[u8]) -> bool {
        match Self::decode(data) {
            Ok(value) => {
                self.value = value;
                self.changed();
                true
            }
            Err(_) => false,
        }
    }

    fn write_serial(&self, out: &mut String) {
        out.push_str(&self.text());
    }

    fn set_serial(&mut self, text: &str) -> bool {
        self.set_text(text)
    }

    fn has_value(&self) -> bool {
        true
    }

    fn has_min_value(&self) -> bool {
        true
    }

    fn has_max_value(&self) -> bool {
        true
    }

    fn value(&self) -> f64 {
        f64::from(u8::from(self.value))
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use crate::node::ValueNodeExt;

    use super::*;

    #[test]
    fn binary_roundtrip() {
        for value in [false, true] {
            let node = BoolNode::new(value);
            let mut restored = BoolNode::default();
            assert!(restored.set_binary(&node.to_binary()));
            assert_eq!(restored, node);
        }
    }

    #[test]
    fn serial_is_human_text() {
        assert_eq!(BoolNode::new(true).to_serial(), "true");
        assert_eq!(BoolNode::new(false).to_serial(), "false");

        let mut node = BoolNode::default();
        assert!(node.set_serial("true"));
        assert!(node.get());
    }

    #[test]
    fn text_accepts_aliases() {
        let mut node = BoolNode::default();
        assert!(node.set_text(" TRUE "));
        assert!(node.get());
        assert!(node.set_text("0"));
        assert!(!node.get());
    }

    #[test]
    fn malformed_input_leaves_state() {
        let mut node = BoolNode::new(true);
        assert!(!node.set_text("yes please"));
        assert!(!node.set_binary(&[]));
        assert!(!node.set_binary(&[NodeKind::Bool.tag(), 2]));
        assert!(!node.set_binary(&[NodeKind::Int.tag(), 1]));
        assert!(node.get());
    }

    #[test]
    fn numeric_facet_reports_flag_range() {
        let node = BoolNode::new(true);
        assert!(node.has_value() && node.has_min_value() && node.has_max_value());
        assert_eq!(node.value(), 1.0);
        assert_eq!(node.min_value(), 0.0);
        assert_eq!(node.max_value(), 1.0);
    }
}
