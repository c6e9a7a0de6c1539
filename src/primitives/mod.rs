//! The concrete value kinds shipped with this crate.
//!
//! Each kind owns its typed payload and implements the [`crate::ValueNode`] contract for
//! it: a tag-prefixed, little-endian canonical binary form, a display/serial text form,
//! and - where the payload supports it - the numeric facet, range clamping or the
//! contents-stream channel. Layouts are per-kind decisions; the shared rules are that
//! every form leads with the kind's tag byte, decodes strictly (trailing bytes are
//! malformed), and commits only after a complete, valid parse.
//!
//! # Shipped Kinds
//!
//! - [`crate::primitives::BoolNode`] - true/false flag, plottable as 0/1
//! - [`crate::primitives::IntNode`] - `i64` with optional clamping bounds
//! - [`crate::primitives::FloatNode`] - finite `f64` with optional clamping bounds
//! - [`crate::primitives::StrNode`] - UTF-8 string
//! - [`crate::primitives::BlobNode`] - opaque bytes with an out-of-band contents payload
//! - [`crate::primitives::ListNode`] - ordered container of shared child nodes

mod blob;
mod boolean;
mod float;
mod int;
mod list;
mod string;

pub use blob::BlobNode;
pub use boolean::BoolNode;
pub use float::FloatNode;
pub use int::IntNode;
pub use list::ListNode;
pub use string::StrNode;

use crate::{io::read_le_at, node::NodeKind, Error, Result};

/// Consumes and verifies the leading tag byte of a canonical binary form.
pub(crate) fn expect_tag(data: &[u8], offset: &mut usize, expected: NodeKind) -> Result<()> {
    let tag: u8 = read_le_at(data, offset)?;
    if tag == expected.tag() {
        return Ok(());
    }

    Err(Error::KindMismatch {
        expected,
        found: NodeKind::from_byte(tag)?,
    })
}

/// Rejects trailing bytes after a complete parse; round-trips are exact or nothing.
pub(crate) fn ensure_consumed(data: &[u8], offset: usize, kind: NodeKind) -> Result<()> {
    if offset == data.len() {
        return Ok(());
    }

    Err(malformed_error!(
        "{} bytes of trailing data after a complete {} encoding",
        data.len() - offset,
        kind
    ))
}
