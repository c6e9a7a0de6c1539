use std::any::Any;

use crate::{
    io::{read_bytes_at, read_le_at, write_le},
    node::{NodeKind, ValueNode},
    primitives::{ensure_consumed, expect_tag},
    Result,
};

/// A UTF-8 string node.
///
/// The one kind whose display text IS its full state: `text`/`set_text` and the serial
/// channel carry the string verbatim (any input accepted, fully lossless), and the
/// binary form is a length-prefixed copy of the same bytes. No numeric facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrNode {
    value: String,
}

impl StrNode {
    /// Creates a string node with the given value.
    pub fn new(value: impl Into<String>) -> Self {
        StrNode {
            value: value.into(),
        }
    }

    /// The current string.
    #[must_use]
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Replaces the string.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.changed();
    }

    fn decode(data: &[u8]) -> Result<String> {
        let mut offset = 0;
        expect_tag(data, &mut offset, NodeKind::Str)?;

        let len: u64 = read_le_at(data, &mut offset)?;
        let Ok(len) = usize::try_from(len) else {
            return Err(malformed_error!("String length {} exceeds address space", len));
        };
        let bytes = read_bytes_at(data, &mut offset, len)?;
        let value = match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(err) => return Err(malformed_error!("String payload is not UTF-8 - {}", err)),
        };

        ensure_consumed(data, offset, NodeKind::Str)?;
        Ok(value)
    }
}

impl ValueNode for StrNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Str
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
        self.value.clone()
    }

    fn set_text(&mut self, val: &str) -> bool {
        self.value = val.to_string();
        self.changed();
        true
    }

    fn write_binary(&self, out: &mut Vec<u8>) {
        write_le(out, NodeKind::Str.tag());
        write_le(out, self.value.len() as u64);
        out.extend_from_slice(self.value.as_bytes());
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
        out.push_str(&self.value);
    }

    fn set_serial(&mut self, text: &str) -> bool {
        self.set_text(text)
    }
}
