use std::any::Any;

use crate::{
    io::{read_le_at, write_le},
    node::{NodeKind, ValueNode},
    primitives::{ensure_consumed, expect_tag},
    Result,
};

const HAS_MIN: u8 = 0b01;
const HAS_MAX: u8 = 0b10;

/// A finite `f64` node with optional range bounds.
///
/// Non-finite values have no canonical text form and no meaning to the plotting
/// callers of the numeric facet, so NaN and the infinities are rejected on every
/// input path; a `FloatNode` always holds a finite value. Bounds behave as on
/// [`crate::primitives::IntNode`]: state in the binary form, clamping on every
/// mutation, decimal-text display and serial forms for the value alone.
///
/// The display text is Rust's shortest round-tripping `f64` rendering, so
/// `set_text(text())` always restores the exact same value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatNode {
    value: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl FloatNode {
    /// Creates an unbounded float node; a non-finite `value` falls back to `0.0`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        FloatNode {
            value: if value.is_finite() { value } else { 0.0 },
            min: None,
            max: None,
        }
    }

    /// Creates a bounded float node, clamping `value` into `[min, max]`.
    ///
    /// Non-finite bounds are ignored; a `min` above `max` is normalized by swapping.
    #[must_use]
    pub fn bounded(value: f64, min: f64, max: f64) -> Self {
        let mut node = FloatNode::new(value);
        if min.is_finite() {
            node.min = Some(min);
        }
        if max.is_finite() {
            node.max = Some(max);
        }
        if let (Some(lo), Some(hi)) = (node.min, node.max) {
            if lo > hi {
                (node.min, node.max) = (Some(hi), Some(lo));
            }
        }
        node.value = node.clamp(node.value);
        node
    }

    /// The current value; always finite.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Sets the value, clamped into the configured bounds.
    ///
    /// Returns `false` without touching the node if `value` is not finite.
    pub fn set(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }

        self.value = self.clamp(value);
        self.changed();
        true
    }

    /// The configured lower bound, if any.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// The configured upper bound, if any.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    fn clamp(&self, value: f64) -> f64 {
        let value = match self.min {
            Some(min) => value.max(min),
            None => value,
        };
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }

    fn decode(data: &[u8]) -> Result<FloatNode> {
        let mut offset = 0;
        expect_tag(data, &mut offset, NodeKind::Float)?;

        let value: f64 = read_le_at(data, &mut offset)?;
        let flags: u8 = read_le_at(data, &mut offset)?;
        if flags & !(HAS_MIN | HAS_MAX) != 0 {
            return Err(malformed_error!("Invalid bounds flags - {:#04x}", flags));
        }

        let min = if flags & HAS_MIN != 0 {
            Some(read_le_at::<f64>(data, &mut offset)?)
        } else {
            None
        };
        let max = if flags & HAS_MAX != 0 {
            Some(read_le_at::<f64>(data, &mut offset)?)
        } else {
            None
        };

        ensure_consumed(data, offset, NodeKind::Float)?;

        if !value.is_finite()
            || min.is_some_and(|min| !min.is_finite())
            || max.is_some_and(|max| !max.is_finite())
        {
            return Err(malformed_error!("Non-finite field in float encoding"));
        }
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(malformed_error!(
                    "Lower bound {} above upper bound {}",
                    min,
                    max
                ));
            }
        }
        if min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max) {
            return Err(malformed_error!("Value {} outside its encoded bounds", value));
        }

        Ok(FloatNode { value, min, max })
    }
}

impl ValueNode for FloatNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Float
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
        self.value.to_string()
    }

    fn set_text(&mut self, val: &str) -> bool {
        match val.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => {
                self.value = self.clamp(parsed);
                self.changed();
                true
            }
            _ => false,
        }
    }

    fn write_binary(&self, out: &mut Vec<u8>) {
        write_le(out, NodeKind::Float.tag());
        write_le(out, self.value);

        let mut flags = 0u8;
        if self.min.is_some() {
            flags |= HAS_MIN;
        }
        if self.max.is_some() {
            flags |= HAS_MAX;
        }
        write_le(out, flags);

        if let Some(min) = self.min {
            write_le(out, min);
        }
        if let Some(max) = self.max {
            write_le(out, max);
        }
    }

    fn set_binary(&mut self, data: &[u8]) -> bool {
        match Self::decode(data) {
            Ok(decoded) => {
                *self = decoded;
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
        self.min.is_some()
    }

    fn has_max_value(&self) -> bool {
        self.max.is_some()
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn min_value(&self) -> f64 {
        self.min.unwrap_or(0.0)
    }

    fn max_value(&self) -> f64 {
        self.max.unwrap_or(0.0)
    }
}
