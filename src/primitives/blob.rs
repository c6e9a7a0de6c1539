use std::{
    any::Any,
    io::{Read, Write},
};

use tracing::debug;

use crate::{
    io::{decode_hex, encode_hex, read_bytes_at, read_le_at, write_le},
    node::{NodeKind, ValueNode},
    primitives::{ensure_consumed, expect_tag},
    Result,
};

/// An opaque byte-payload node.
///
/// The binary form inlines the payload (length-prefixed) so it stays total and exactly
/// round-trippable like every other kind; a persistence layer that does not want the
/// bytes inline additionally gets the contents-stream channel, which streams the raw
/// payload to and from a side-file named with the default `".bin"` extension. Display
/// text is lowercase hex of the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlobNode {
    data: Vec<u8>,
}

impl BlobNode {
    /// Creates a blob node over the given bytes.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        BlobNode { data }
    }

    /// The current payload.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Replaces the payload.
    pub fn set_bytes(&mut self, data: Vec<u8>) {
        self.data = data;
        self.changed();
    }

    /// Payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn decode(data: &[u8]) -> Result<Vec<u8>> {
        let mut offset = 0;
        expect_tag(data, &mut offset, NodeKind::Blob)?;

        let len: u64 = read_le_at(data, &mut offset)?;
        let Ok(len) = usize::try_from(len) else {
            return Err(malformed_error!("Blob length {} exceeds address space", len));
        };
        let payload = read_bytes_at(data, &mut offset, len)?.to_vec();

        ensure_consumed(data, offset, NodeKind::Blob)?;
        Ok(payload)
    }
}

impl ValueNode for BlobNode {
    fn kind(&self) -> NodeKind {
        NodeKind::Blob
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

    // A multi-megabyte hex dump helps nobody; log the size instead.
    fn print_debug(&self) {
        debug!(kind = %self.kind(), bytes = self.data.len(), "value node");
    }

    fn text(&self) -> String {
        encode_hex(&self.data)
    }

    fn set_text(&mut self, val: &str) -> bool {
        match decode_hex(val.trim()) {
            Ok(decoded) => {
                self.data = decoded;
                self.changed();
                true
            }
            Err(_) => false,
        }
    }

    fn write_binary(&self, out: &mut Vec<u8>) {
        write_le(out, NodeKind::Blob.tag());
        write_le(out, self.data.len() as u64);
        out.extend_from_slice(&self.data);
    }

    fn set_binary(&mut self, data: &[u8]) -> bool {
        match Self::decode(data) {
            Ok(payload) => {
                self.data = payload;
                self.changed();
                true
            }
            Err(_) => false,
        }
    }

    fn write_contents(&self, stream: &mut dyn Write) -> Result<()> {
        stream.write_all(&self.data)?;
        Ok(())
    }

    fn read_contents(&mut self, stream: &mut dyn Read, _extension: &str) -> bool {
        // Raw side-file bytes regardless of the extension hint; read to a
        // scratch buffer first so a failing stream leaves the payload intact.
        let mut buf = Vec::new();
        match stream.read_to_end(&mut buf) {
            Ok(_) => {
                self.data = buf;
                self.changed();
                true
            }
            Err(_) => false,
        }
    }
}
