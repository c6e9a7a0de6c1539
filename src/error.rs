use thiserror::Error;

use crate::node::NodeKind;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers the failure modes of canonical binary and serial decoding, polymorphic
/// node construction, and contents-stream I/O. Note that the [`crate::ValueNode`] trait surface
/// itself reports rejected input through boolean returns; these variants are what the internal
/// decoders produce before that conversion, and what the crate-level entry points such as
/// [`crate::node_from_binary`] surface directly.
///
/// # Error Categories
///
/// ## Decoding Errors
/// - [`Error::Malformed`] - Input that cannot be interpreted by the target kind
/// - [`Error::OutOfBounds`] - Attempted to read beyond the end of the input
/// - [`Error::Empty`] - Empty input where an encoded node was expected
///
/// ## Kind Dispatch Errors
/// - [`Error::UnknownKind`] - Tag byte that maps to no known node kind
/// - [`Error::KindMismatch`] - Encoded form fed to a node of a different kind
///
/// ## I/O Errors
/// - [`Error::Io`] - Failure of a caller-supplied contents stream
///
/// # Examples
///
/// ```rust
/// use vartree::{node_from_binary, Error, ValueNode};
///
/// match node_from_binary(&[0xFF, 0x00]) {
///     Ok(node) => println!("restored a {} node", node.kind()),
///     Err(Error::UnknownKind(tag)) => eprintln!("no kind with tag {tag:#04x}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The input is damaged and could not be decoded.
    ///
    /// This error indicates that the encoded form does not conform to the
    /// target kind's canonical layout. The error includes the source location
    /// where the malformation was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while decoding the input.
    ///
    /// This error occurs when a field read would run past the end of the
    /// encoded form. It's a safety check to prevent buffer overruns during
    /// decoding.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// Provided input was empty.
    ///
    /// This error occurs when an empty buffer is provided where an encoded
    /// node (which always carries at least its tag byte) was expected.
    #[error("Provided input was empty")]
    Empty,

    /// The tag byte does not name any known node kind.
    ///
    /// Every canonical binary form leads with the tag byte of the kind that
    /// produced it; this error reports a tag outside the registered range.
    #[error("Unknown node kind tag - {0:#04x}")]
    UnknownKind(u8),

    /// An encoded form of one kind was fed to a node of another kind.
    ///
    /// Canonical forms are only accepted by the kind that produced them.
    /// The node rejecting the input is left untouched.
    #[error("Node kind mismatch - expected {expected}, found {found}")]
    KindMismatch {
        /// The kind of the node that was asked to decode the input
        expected: NodeKind,
        /// The kind named by the input's tag byte
        found: NodeKind,
    },

    /// Contents-stream I/O error.
    ///
    /// Wraps standard I/O errors raised by the caller-supplied stream while
    /// writing a node's secondary contents payload.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
